pub mod config;
pub mod error;

pub use config::CombatLayout;
pub use error::{BotaError, Result};
