//! Reroll tray (test mode)
//!
//! Dashed tray under the rolling box holding the dice selected for reroll.
//! Only the tray shell is drawn here; each die is drawn by the dice system.

use glam::DVec2;

use super::dice::DiceSystem;
use crate::core::CombatLayout;
use crate::render::colors::{TRAY_BACKGROUND, TRAY_BORDER, TRAY_LABEL};
use crate::render::{CanvasSize, DrawSurface, TextAlign};

/// Edge length of a die in the tray
pub const TRAY_DIE_SIZE: f64 = 50.0;
/// Horizontal distance between tray slots
pub const TRAY_DIE_SPACING: f64 = 60.0;
/// Offset of the first slot from the tray's left edge
pub const TRAY_DIE_LEAD: f64 = 30.0;

const BORDER_DASH: [f64; 2] = [5.0, 5.0];
const LABEL: &str = "Reroll Tray";
const LABEL_FONT: &str = "16px Arial";
/// Label baseline above the tray top
const LABEL_RISE: f64 = 8.0;

/// Top-left corner of the tray
pub fn tray_origin(canvas: CanvasSize, layout: &CombatLayout) -> DVec2 {
    DVec2::new(
        canvas.center_x() - layout.rolling_box_width / 2.0,
        layout.reroll_tray_y,
    )
}

/// Center of the `slot`-th die in the tray
pub fn slot_center(origin: DVec2, layout: &CombatLayout, slot: usize) -> DVec2 {
    DVec2::new(
        origin.x + TRAY_DIE_LEAD + slot as f64 * TRAY_DIE_SPACING,
        origin.y + layout.reroll_tray_height / 2.0,
    )
}

/// Draw the tray and hand every selected die to the dice system.
///
/// Draws nothing when there is no dice system.
pub fn render_reroll_tray<D: DiceSystem>(
    surface: &mut dyn DrawSurface,
    canvas: CanvasSize,
    layout: &CombatLayout,
    dice: Option<&D>,
) {
    let Some(dice) = dice else {
        return;
    };

    let origin = tray_origin(canvas, layout);
    let (width, height) = (layout.reroll_tray_width, layout.reroll_tray_height);

    surface.set_fill_color(TRAY_BACKGROUND);
    surface.fill_rect(origin.x, origin.y, width, height);

    surface.set_stroke_color(TRAY_BORDER);
    surface.set_line_width(2.0);
    surface.set_line_dash(&BORDER_DASH);
    surface.stroke_rect(origin.x, origin.y, width, height);
    surface.set_line_dash(&[]);

    surface.set_fill_color(TRAY_LABEL);
    surface.set_font(LABEL_FONT);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text(LABEL, origin.x + width / 2.0, origin.y - LABEL_RISE);
    surface.set_text_align(TextAlign::Left);

    let state = dice.tray_state();
    for (slot, &index) in state.reroll_tray.iter().enumerate() {
        let Some((die, die_state)) = state.die_at(index) else {
            tracing::warn!(index, "Reroll tray references a die that does not exist");
            continue;
        };
        let center = slot_center(origin, layout, slot);
        dice.draw_perspective_die(surface, die, center.x, center.y, TRAY_DIE_SIZE, die_state, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
    use crate::ui::dice::DiceTrayState;

    /// Marks each die with a text draw so calls show up in the recording
    struct MarkerDice(DiceTrayState<&'static str, ()>);

    impl DiceSystem for MarkerDice {
        type Die = &'static str;
        type DieState = ();

        fn tray_state(&self) -> &DiceTrayState<&'static str, ()> {
            &self.0
        }

        fn draw_perspective_die(
            &self,
            surface: &mut dyn DrawSurface,
            die: &&'static str,
            x: f64,
            y: f64,
            _size: f64,
            _state: &(),
            _index: usize,
        ) {
            surface.fill_text(die, x, y);
        }
    }

    #[test]
    fn test_missing_dice_system_draws_nothing() {
        let mut surface = RecordingSurface::new();
        render_reroll_tray::<MarkerDice>(
            &mut surface,
            CanvasSize::new(1000.0, 700.0),
            &CombatLayout::default(),
            None,
        );
        assert!(surface.is_empty());
    }

    #[test]
    fn test_dash_is_reset_and_label_centered() {
        let dice = MarkerDice(DiceTrayState::default());
        let mut surface = RecordingSurface::new();
        render_reroll_tray(
            &mut surface,
            CanvasSize::new(1000.0, 700.0),
            &CombatLayout::default(),
            Some(&dice),
        );

        assert!(surface.line_dash().is_empty());
        assert_eq!(surface.text_align(), TextAlign::Left);
        // tray_x = 500 - 250
        assert_eq!(surface.texts(), vec![("Reroll Tray", 400.0, 492.0)]);
        assert!(surface.commands().contains(&DrawCommand::LineDash {
            segments: vec![5.0, 5.0]
        }));
    }

    #[test]
    fn test_unknown_die_index_keeps_slot_numbering() {
        let mut state = DiceTrayState::new(vec!["axe", "jab"], vec![(), ()]);
        state.reroll_tray = vec![1, 7, 0];
        let dice = MarkerDice(state);

        let mut surface = RecordingSurface::new();
        render_reroll_tray(
            &mut surface,
            CanvasSize::new(1000.0, 700.0),
            &CombatLayout::default(),
            Some(&dice),
        );

        let texts = surface.texts();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1], ("jab", 280.0, 550.0));
        assert_eq!(texts[2], ("axe", 400.0, 550.0));
    }
}
