//! Combat screen overlay widgets
//!
//! Widgets are stateless: every frame the host passes in the state to show.

pub mod combat_log;
pub mod dice;
pub mod reroll_tray;
pub mod state;

pub use combat_log::render_combat_log;
pub use dice::{DiceSystem, DiceTrayState};
pub use reroll_tray::render_reroll_tray;
pub use state::{CombatLog, LogEntry, MAX_LOG_ENTRIES};
