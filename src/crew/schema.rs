//! Crew record definitions
//!
//! A crew type is a hireable unit with a health pool and up to two dice:
//! a personal die (innate ability) and an equipment die (gear it brings).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::faces::DieFaces;

/// Allowed crew health totals
pub const HEALTH_RANGE: RangeInclusive<u32> = 30..=100;

/// Die representing a crew's innate abilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDie {
    pub faces: DieFaces,
}

/// Die representing gear the crew brings aboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDie {
    /// Display name of the equipment
    pub equipment: String,
    pub faces: DieFaces,
}

/// Which slot a crew die occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSlot {
    Personal,
    Equipment,
}

/// A crew type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRecord {
    /// Unique identifier
    pub id: String,
    /// Display name (short)
    pub name: String,
    /// Flavor text
    pub description: String,
    /// Total hit points, within [`HEALTH_RANGE`]
    pub health: u32,
    #[serde(default)]
    pub personal_die: Option<PersonalDie>,
    #[serde(default)]
    pub equipment_die: Option<EquipmentDie>,
    /// Faction allowed to hire this crew. `None` = every faction.
    #[serde(default)]
    pub faction: Option<String>,
}

impl CrewRecord {
    /// Dice this crew contributes to a roll, personal first
    pub fn dice(&self) -> impl Iterator<Item = (DieSlot, &DieFaces)> {
        let personal = self
            .personal_die
            .as_ref()
            .map(|d| (DieSlot::Personal, &d.faces));
        let equipment = self
            .equipment_die
            .as_ref()
            .map(|d| (DieSlot::Equipment, &d.faces));
        personal.into_iter().chain(equipment)
    }

    /// Number of dice (0, 1 or 2)
    pub fn die_count(&self) -> usize {
        self.dice().count()
    }

    pub fn has_equipment(&self) -> bool {
        self.equipment_die.is_some()
    }

    /// Whether a faction may hire this crew
    pub fn available_to(&self, faction: Option<&str>) -> bool {
        match self.faction.as_deref() {
            None => true,
            owner => owner == faction,
        }
    }
}
