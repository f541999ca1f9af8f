//! Color definitions for the combat overlay widgets

use std::fmt;

/// RGBA color: 8-bit channels, alpha 0.0 to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS color string, as the browser canvas expects it
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const WHITE: Color = Color::hex(0xffffff);

// Combat log panel
pub const LOG_BACKGROUND: Color = Color::new(0, 0, 0, 0.7);
pub const LOG_BORDER: Color = Color::hex(0x888888);
pub const LOG_TITLE: Color = Color::hex(0xcccccc);
pub const LOG_TEXT: Color = WHITE;

// Reroll tray
pub const TRAY_BACKGROUND: Color = Color::hex(0x3a3a2a);
pub const TRAY_BORDER: Color = Color::hex(0x777755);
pub const TRAY_LABEL: Color = Color::hex(0x999977);
