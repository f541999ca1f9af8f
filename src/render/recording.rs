//! Surface that records draw calls instead of rasterizing them

use serde::Serialize;
use std::fmt;

use super::colors::Color;
use super::surface::{DrawSurface, TextAlign};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillColor { color: String },
    StrokeColor { color: String },
    LineWidth { width: f64 },
    LineDash { segments: Vec<f64> },
    Font { font: String },
    TextAlign { align: TextAlign },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64 },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::FillColor { color } => write!(f, "fillStyle = {}", color),
            DrawCommand::StrokeColor { color } => write!(f, "strokeStyle = {}", color),
            DrawCommand::LineWidth { width } => write!(f, "lineWidth = {}", width),
            DrawCommand::LineDash { segments } => write!(f, "setLineDash({:?})", segments),
            DrawCommand::Font { font } => write!(f, "font = {}", font),
            DrawCommand::TextAlign { align } => write!(f, "textAlign = {}", align.as_str()),
            DrawCommand::FillRect { x, y, width, height } => {
                write!(f, "fillRect({}, {}, {}, {})", x, y, width, height)
            }
            DrawCommand::StrokeRect { x, y, width, height } => {
                write!(f, "strokeRect({}, {}, {}, {})", x, y, width, height)
            }
            DrawCommand::FillText { text, x, y } => write!(f, "fillText({:?}, {}, {})", text, x, y),
        }
    }
}

/// Records every call in order, tracking the current paint state
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    text_align: TextAlign,
    line_dash: Vec<f64>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current text alignment
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Current dash pattern
    pub fn line_dash(&self) -> &[f64] {
        &self.line_dash
    }

    /// Text draws with their positions, in call order
    pub fn texts(&self) -> Vec<(&str, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor { color: color.css() });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor { color: color.css() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth { width });
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.line_dash = segments.to_vec();
        self.commands.push(DrawCommand::LineDash {
            segments: segments.to_vec(),
        });
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font { font: font.to_string() });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
        self.commands.push(DrawCommand::TextAlign { align });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
