//! 2D drawing primitives for the combat overlay
//!
//! Widgets draw through [`DrawSurface`]. This module never owns game state.

pub mod colors;
pub mod recording;
pub mod surface;

#[cfg(feature = "web")]
pub mod canvas;

pub use colors::Color;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{CanvasSize, DrawSurface, TextAlign};
