//! Combat screen layout configuration
//!
//! Pixel measurements shared by the combat screen widgets. The defaults match
//! the shipped combat screen; a TOML file can override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{BotaError, Result};

/// Layout of the dice area of the combat screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatLayout {
    /// Width of the rolling box (pixels)
    ///
    /// The rolling box is centered on the canvas. The reroll tray shares its
    /// left edge, so this width decides where the tray starts.
    pub rolling_box_width: f64,

    /// Top edge of the reroll tray (pixels from canvas top)
    pub reroll_tray_y: f64,

    /// Width of the reroll tray (pixels)
    ///
    /// Each tray slot takes 60px after a 30px lead-in, so the default 300px
    /// fits four dice comfortably.
    pub reroll_tray_width: f64,

    /// Height of the reroll tray (pixels)
    ///
    /// Dice are drawn centered vertically inside the tray.
    pub reroll_tray_height: f64,
}

impl Default for CombatLayout {
    fn default() -> Self {
        Self {
            rolling_box_width: 500.0,
            reroll_tray_y: 500.0,
            reroll_tray_width: 300.0,
            reroll_tray_height: 100.0,
        }
    }
}

impl CombatLayout {
    /// Parse a layout from TOML. Missing keys keep their defaults.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BotaError::ConfigError(e.to_string()))
    }

    /// Load a layout from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BotaError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}
