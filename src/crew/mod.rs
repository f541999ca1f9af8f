//! Crew catalog
//!
//! Static crew type definitions used by ship management and combat,
//! with pure lookup and filter queries.

pub mod faces;
pub mod registry;
pub mod schema;

pub use faces::{DieFaces, FaceCategory, FaceColor, FacesError, FACES_PER_DIE, MAX_COLORS_PER_DIE};
pub use registry::{
    default_registry, get_all_crew, get_crew_by_faction, get_crew_by_id, get_crew_with_equipment,
    CrewError, CrewRegistry,
};
pub use schema::{CrewRecord, DieSlot, EquipmentDie, PersonalDie, HEALTH_RANGE};
