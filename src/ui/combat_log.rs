//! Combat log panel
//!
//! Overlay in the lower-left corner showing the most recent combat events.

use glam::DVec2;

use super::state::CombatLog;
use crate::render::colors::{LOG_BACKGROUND, LOG_BORDER, LOG_TEXT, LOG_TITLE};
use crate::render::{CanvasSize, DrawSurface, TextAlign};

/// Entries shown at once
pub const VISIBLE_ENTRIES: usize = 5;

pub const PANEL_WIDTH: f64 = 400.0;
pub const PANEL_HEIGHT: f64 = 90.0;
/// Left edge of the panel
pub const PANEL_MARGIN_X: f64 = 20.0;
/// Distance from the canvas bottom to the panel top
pub const PANEL_BOTTOM_OFFSET: f64 = 180.0;

const TITLE: &str = "Combat Log:";
const TITLE_FONT: &str = "bold 12px Arial";
const ENTRY_FONT: &str = "11px Arial";
const TEXT_INSET: DVec2 = DVec2::new(10.0, 15.0);
/// Baseline of the first entry below the panel top
const FIRST_ENTRY_Y: f64 = 35.0;
const LINE_PITCH: f64 = 14.0;

/// Top-left corner of the panel for a canvas
pub fn panel_origin(canvas: CanvasSize) -> DVec2 {
    DVec2::new(PANEL_MARGIN_X, canvas.height - PANEL_BOTTOM_OFFSET)
}

/// Draw the last [`VISIBLE_ENTRIES`] log entries.
///
/// Draws nothing when no combat is running (`log` is `None`).
pub fn render_combat_log(surface: &mut dyn DrawSurface, canvas: CanvasSize, log: Option<&CombatLog>) {
    let Some(log) = log else {
        return;
    };

    let origin = panel_origin(canvas);

    surface.set_fill_color(LOG_BACKGROUND);
    surface.fill_rect(origin.x, origin.y, PANEL_WIDTH, PANEL_HEIGHT);

    surface.set_stroke_color(LOG_BORDER);
    surface.set_line_width(2.0);
    surface.stroke_rect(origin.x, origin.y, PANEL_WIDTH, PANEL_HEIGHT);

    let title = origin + TEXT_INSET;
    surface.set_fill_color(LOG_TITLE);
    surface.set_font(TITLE_FONT);
    surface.fill_text(TITLE, title.x, title.y);

    surface.set_fill_color(LOG_TEXT);
    surface.set_font(ENTRY_FONT);
    for (i, entry) in log.recent(VISIBLE_ENTRIES).enumerate() {
        let y = origin.y + FIRST_ENTRY_Y + i as f64 * LINE_PITCH;
        surface.fill_text(&entry.display_text(), origin.x + TEXT_INSET.x, y);
    }

    surface.set_text_align(TextAlign::Left);
}
