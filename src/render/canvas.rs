//! Browser canvas backend

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::colors::Color;
use super::surface::{DrawSurface, TextAlign};

impl DrawSurface for CanvasRenderingContext2d {
    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_str(&color.css());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_str(&color.css());
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let array: js_sys::Array = segments.iter().map(|s| JsValue::from_f64(*s)).collect();
        if let Err(e) = CanvasRenderingContext2d::set_line_dash(self, &array) {
            tracing::warn!("setLineDash failed: {:?}", e);
        }
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        CanvasRenderingContext2d::set_text_align(self, align.as_str());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x, y) {
            tracing::warn!("fillText failed: {:?}", e);
        }
    }
}
