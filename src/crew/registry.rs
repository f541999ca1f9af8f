//! Crew registry: the fixed catalog of crew types.
//!
//! The registry is built once and never mutated. Every query is a pure read
//! that preserves catalog order.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use super::faces::{DieFaces, FaceColor};
use super::schema::{CrewRecord, EquipmentDie, PersonalDie, HEALTH_RANGE};

#[derive(Error, Debug)]
pub enum CrewError {
    #[error("Crew with id {0:?} not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid crew catalog: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

/// Immutable, ordered crew catalog
#[derive(Debug, Clone)]
pub struct CrewRegistry {
    records: Vec<CrewRecord>,
    /// Position of each record by id
    by_id: AHashMap<String, usize>,
}

impl CrewRegistry {
    /// Build a registry, checking id uniqueness and health bounds
    pub fn new(records: Vec<CrewRecord>) -> Result<Self, CrewError> {
        let errors = validate(&records);
        if !errors.is_empty() {
            return Err(CrewError::Invalid(errors));
        }
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<CrewRecord>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        tracing::debug!("Built crew registry with {} records", records.len());
        Self { records, by_id }
    }

    /// The reference crew table
    pub fn with_defaults() -> Self {
        let records = reference_records();
        debug_assert!(validate(&records).is_empty(), "reference crew table is invalid");
        Self::from_records(records)
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self, CrewError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
            .map_err(|e| match e {
                CrewError::Parse(msg) => CrewError::Parse(format!("{}: {}", path.display(), msg)),
                other => other,
            })
    }

    /// Parse a catalog from a TOML string holding a `[[crew]]` array
    pub fn parse_toml(content: &str) -> Result<Self, CrewError> {
        let file: TomlCrewFile =
            toml::from_str(content).map_err(|e| CrewError::Parse(e.to_string()))?;
        Self::new(file.crew)
    }

    /// Record with the given id
    pub fn get(&self, id: &str) -> Result<&CrewRecord, CrewError> {
        self.by_id
            .get(id)
            .map(|&i| &self.records[i])
            .ok_or_else(|| CrewError::NotFound(id.to_string()))
    }

    /// All records in declaration order
    pub fn all(&self) -> &[CrewRecord] {
        &self.records
    }

    /// Records hireable by `faction`: its own plus the faction-less ones
    pub fn by_faction<'a, 'f>(
        &'a self,
        faction: Option<&'f str>,
    ) -> impl Iterator<Item = &'a CrewRecord> + 'f
    where
        'a: 'f,
    {
        self.records.iter().filter(move |r| r.available_to(faction))
    }

    /// Records that bring an equipment die
    pub fn with_equipment(&self) -> impl Iterator<Item = &CrewRecord> {
        self.records.iter().filter(|r| r.has_equipment())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CrewRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// TOML representation of a crew catalog file
#[derive(Debug, Deserialize)]
struct TomlCrewFile {
    crew: Vec<CrewRecord>,
}

/// Collect every invariant violation in a record list
fn validate(records: &[CrewRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen: AHashMap<&str, usize> = AHashMap::new();

    for (i, record) in records.iter().enumerate() {
        if let Some(first) = seen.insert(record.id.as_str(), i) {
            errors.push(format!(
                "duplicate crew id '{}' at entries {} and {}",
                record.id, first, i
            ));
        }
        if !HEALTH_RANGE.contains(&record.health) {
            errors.push(format!(
                "crew '{}' health {} is out of range [{}, {}]",
                record.id,
                record.health,
                HEALTH_RANGE.start(),
                HEALTH_RANGE.end()
            ));
        }
    }

    errors
}

fn reference_records() -> Vec<CrewRecord> {
    use FaceColor::{Blue, Green, Red};

    vec![
        // Basic sailors, operate ship equipment
        CrewRecord {
            id: "crew".into(),
            name: "Crew".into(),
            description: "Basic sailors and deckhands who operate the ship's equipment.".into(),
            health: 50,
            personal_die: None,
            equipment_die: None,
            faction: None,
        },
        CrewRecord {
            id: "marines".into(),
            name: "Marines".into(),
            description: "Professional soldiers trained for ship-to-ship combat.".into(),
            health: 80,
            personal_die: Some(PersonalDie {
                faces: DieFaces::split(Red, Green),
            }),
            equipment_die: Some(EquipmentDie {
                equipment: "Marine Gear".into(),
                faces: DieFaces::split(Red, Green),
            }),
            faction: None,
        },
        CrewRecord {
            id: "sharpshooters".into(),
            name: "Sharpshooters".into(),
            description: "Elite marksmen with precision weapons and keen eyes.".into(),
            health: 60,
            personal_die: Some(PersonalDie {
                faces: DieFaces::split(Green, Blue),
            }),
            equipment_die: Some(EquipmentDie {
                equipment: "Precision Rifles".into(),
                faces: DieFaces::uniform(Green),
            }),
            faction: None,
        },
        CrewRecord {
            id: "grunts".into(),
            name: "Grunts".into(),
            description: "Tough fighters who rely on brute strength and determination.".into(),
            health: 90,
            personal_die: Some(PersonalDie {
                faces: DieFaces::uniform(Red),
            }),
            equipment_die: None,
            faction: None,
        },
        CrewRecord {
            id: "apprentices".into(),
            name: "Apprentices".into(),
            description: "Young mages learning the arcane arts under experienced masters."
                .into(),
            health: 40,
            personal_die: Some(PersonalDie {
                faces: DieFaces::uniform(Blue),
            }),
            equipment_die: None,
            faction: None,
        },
    ]
}

static DEFAULT_REGISTRY: OnceLock<CrewRegistry> = OnceLock::new();

/// Process-wide reference registry, built on first use
pub fn default_registry() -> &'static CrewRegistry {
    DEFAULT_REGISTRY.get_or_init(CrewRegistry::with_defaults)
}

/// Look up a crew type by id.
///
/// Acting on an unknown id is a caller bug, so the error is returned rather
/// than swallowed.
pub fn get_crew_by_id(id: &str) -> Result<&'static CrewRecord, CrewError> {
    default_registry().get(id)
}

/// Every crew type, in catalog order
pub fn get_all_crew() -> &'static [CrewRecord] {
    default_registry().all()
}

/// Crew types hireable by `faction` (including faction-less ones)
pub fn get_crew_by_faction(faction: Option<&str>) -> Vec<&'static CrewRecord> {
    default_registry()
        .all()
        .iter()
        .filter(|r| r.available_to(faction))
        .collect()
}

/// Crew types that come with an equipment die
pub fn get_crew_with_equipment() -> Vec<&'static CrewRecord> {
    default_registry().with_equipment().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CREWS: &str = r#"
[[crew]]
id = "raiders"
name = "Raiders"
description = "Boarding specialists."
health = 70
faction = "pirates"

[crew.personal_die]
faces = "4 red, 2 blank"

[[crew]]
id = "deckhands"
name = "Deckhands"
description = "Rope and sail."
health = 30
"#;

    #[test]
    fn test_reference_table_is_valid() {
        assert!(validate(&reference_records()).is_empty());
        assert_eq!(CrewRegistry::with_defaults().len(), 5);
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = CrewRegistry::with_defaults();
        let err = registry.get("pirate_king").unwrap_err();
        assert!(matches!(err, CrewError::NotFound(ref id) if id == "pirate_king"));
        assert_eq!(err.to_string(), "Crew with id \"pirate_king\" not found");
    }

    #[test]
    fn test_parse_toml_catalog() {
        let registry = CrewRegistry::parse_toml(TWO_CREWS).unwrap();
        assert_eq!(registry.len(), 2);

        let raiders = registry.get("raiders").unwrap();
        assert_eq!(raiders.faction.as_deref(), Some("pirates"));
        let faces = raiders.personal_die.as_ref().unwrap().faces;
        assert_eq!(faces.count_of(FaceColor::Red), 4);
        assert_eq!(faces.blank_faces(), 2);

        let deckhands = registry.get("deckhands").unwrap();
        assert_eq!(deckhands.die_count(), 0);
        assert_eq!(deckhands.faction, None);
    }

    #[test]
    fn test_faction_filter_on_loaded_catalog() {
        let registry = CrewRegistry::parse_toml(TWO_CREWS).unwrap();

        let pirates: Vec<&str> = registry
            .by_faction(Some("pirates"))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(pirates, vec!["raiders", "deckhands"]);

        let navy: Vec<&str> = registry
            .by_faction(Some("navy"))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(navy, vec!["deckhands"]);
    }

    #[test]
    fn test_faction_results_outlive_faction_name() {
        let registry = CrewRegistry::parse_toml(TWO_CREWS).unwrap();

        let hired: Vec<&CrewRecord> = {
            let faction = String::from("pirates");
            registry.by_faction(Some(faction.as_str())).collect()
        };
        let ids: Vec<&str> = hired.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["raiders", "deckhands"]);

        let outsiders: Vec<&CrewRecord> = {
            let faction = format!("{}-navy", "royal");
            registry.by_faction(Some(&faction)).collect()
        };
        assert_eq!(outsiders.len(), 1);
        assert_eq!(outsiders[0].id, "deckhands");
    }

    #[test]
    fn test_rejects_duplicate_ids_and_bad_health() {
        let mut records = reference_records();
        records[1].id = "crew".into();
        records[2].health = 120;

        match CrewRegistry::new(records) {
            Err(CrewError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("duplicate crew id 'crew'"));
                assert!(errors[1].contains("health 120"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_faces_in_toml() {
        let bad = r#"
[[crew]]
id = "wizards"
name = "Wizards"
description = "Too colorful."
health = 40

[crew.personal_die]
faces = "2 red, 2 green, 2 blue"
"#;
        let err = CrewRegistry::parse_toml(bad).unwrap_err();
        assert!(matches!(err, CrewError::Parse(ref msg) if msg.contains("at most 2")));
    }
}
