//! Overlay widget integration tests
//!
//! Render the combat log and reroll tray on a recording surface and check the
//! calls they issue.

use bota::core::CombatLayout;
use bota::render::{CanvasSize, DrawCommand, DrawSurface, RecordingSurface, TextAlign};
use bota::ui::{render_combat_log, render_reroll_tray, CombatLog, DiceSystem, DiceTrayState, LogEntry};
use std::cell::RefCell;

const CANVAS: CanvasSize = CanvasSize::new(1200.0, 800.0);

/// Records every delegate call without drawing
#[derive(Default)]
struct SpyDice {
    state: DiceTrayState<u32, String>,
    calls: RefCell<Vec<(u32, f64, f64, f64, String, usize)>>,
}

impl DiceSystem for SpyDice {
    type Die = u32;
    type DieState = String;

    fn tray_state(&self) -> &DiceTrayState<u32, String> {
        &self.state
    }

    fn draw_perspective_die(
        &self,
        _surface: &mut dyn DrawSurface,
        die: &u32,
        x: f64,
        y: f64,
        size: f64,
        state: &String,
        index: usize,
    ) {
        self.calls
            .borrow_mut()
            .push((*die, x, y, size, state.clone(), index));
    }
}

fn spy_with_dice(count: u32) -> SpyDice {
    let dice: Vec<u32> = (0..count).map(|i| 100 + i).collect();
    let states: Vec<String> = (0..count).map(|i| format!("state{}", i)).collect();
    SpyDice {
        state: DiceTrayState::new(dice, states),
        calls: RefCell::new(Vec::new()),
    }
}

#[test]
fn test_combat_log_shows_last_five_in_order() {
    let mut log = CombatLog::new();
    for i in 1..=7 {
        log.add_log(i, format!("event {}", i));
    }

    let mut surface = RecordingSurface::new();
    render_combat_log(&mut surface, CANVAS, Some(&log));

    let texts = surface.texts();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[0].0, "Combat Log:");

    let lines: Vec<&str> = texts[1..].iter().map(|t| t.0).collect();
    assert_eq!(lines, vec!["event 3", "event 4", "event 5", "event 6", "event 7"]);

    // Top to bottom at a fixed pitch
    let ys: Vec<f64> = texts[1..].iter().map(|t| t.2).collect();
    assert_eq!(ys, vec![655.0, 669.0, 683.0, 697.0, 711.0]);
}

#[test]
fn test_combat_log_mixed_entries() {
    let log = CombatLog::from_entries(vec![
        LogEntry::from("plain"),
        LogEntry::Record {
            turn: 2,
            message: Some("structured".into()),
            timestamp_ms: 1,
        },
        LogEntry::Record {
            turn: 5,
            message: None,
            timestamp_ms: 2,
        },
    ]);

    let mut surface = RecordingSurface::new();
    render_combat_log(&mut surface, CANVAS, Some(&log));

    let lines: Vec<&str> = surface.texts()[1..].iter().map(|t| t.0).collect();
    assert_eq!(lines, vec!["plain", "structured", "[turn 5]"]);
}

#[test]
fn test_combat_log_without_combat_draws_nothing() {
    let mut surface = RecordingSurface::new();
    render_combat_log(&mut surface, CANVAS, None);
    assert!(surface.commands().is_empty());
}

#[test]
fn test_combat_log_resets_alignment() {
    let mut surface = RecordingSurface::new();
    surface.set_text_align(TextAlign::Right);
    render_combat_log(&mut surface, CANVAS, Some(&CombatLog::new()));
    assert_eq!(surface.text_align(), TextAlign::Left);
    assert_eq!(
        surface.commands().last(),
        Some(&DrawCommand::TextAlign {
            align: TextAlign::Left
        })
    );
}

#[test]
fn test_empty_tray_draws_shell_only() {
    let dice = spy_with_dice(4);
    let layout = CombatLayout::default();

    let mut surface = RecordingSurface::new();
    render_reroll_tray(&mut surface, CANVAS, &layout, Some(&dice));

    // tray_x = 600 - 250
    let expected_rect = (350.0, 500.0, 300.0, 100.0);
    assert!(surface.commands().contains(&DrawCommand::FillRect {
        x: expected_rect.0,
        y: expected_rect.1,
        width: expected_rect.2,
        height: expected_rect.3,
    }));
    assert!(surface.commands().contains(&DrawCommand::StrokeRect {
        x: expected_rect.0,
        y: expected_rect.1,
        width: expected_rect.2,
        height: expected_rect.3,
    }));
    assert_eq!(surface.texts(), vec![("Reroll Tray", 500.0, 492.0)]);
    assert!(dice.calls.borrow().is_empty());
}

#[test]
fn test_tray_delegates_each_selected_die() {
    let mut dice = spy_with_dice(5);
    for index in [3, 0, 4] {
        dice.state.toggle_reroll(index);
    }
    let layout = CombatLayout::default();

    let mut surface = RecordingSurface::new();
    render_reroll_tray(&mut surface, CANVAS, &layout, Some(&dice));

    let calls = dice.calls.borrow();
    assert_eq!(calls.len(), 3);

    let tray_x = 350.0;
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.1, tray_x + 30.0 + i as f64 * 60.0);
        assert_eq!(call.2, 550.0);
        assert_eq!(call.3, 50.0);
    }

    let delegated: Vec<(u32, &str, usize)> = calls
        .iter()
        .map(|c| (c.0, c.4.as_str(), c.5))
        .collect();
    assert_eq!(
        delegated,
        vec![(103, "state3", 3), (100, "state0", 0), (104, "state4", 4)]
    );
}

#[test]
fn test_tray_uses_custom_layout() {
    let mut dice = spy_with_dice(1);
    dice.state.toggle_reroll(0);
    let layout = CombatLayout::parse_toml(
        "rolling_box_width = 600.0\nreroll_tray_y = 300.0\nreroll_tray_height = 80.0",
    )
    .unwrap();

    let mut surface = RecordingSurface::new();
    render_reroll_tray(&mut surface, CANVAS, &layout, Some(&dice));

    let calls = dice.calls.borrow();
    assert_eq!((calls[0].1, calls[0].2), (330.0, 340.0));
    assert!(surface.line_dash().is_empty());
}

#[test]
fn test_tray_without_dice_system_draws_nothing() {
    let mut surface = RecordingSurface::new();
    render_reroll_tray::<SpyDice>(&mut surface, CANVAS, &CombatLayout::default(), None);
    assert!(surface.is_empty());
}
