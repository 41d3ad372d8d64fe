//! Core engine types: identifiers, RNG, configuration.

pub mod config;
pub mod entity;
pub mod rng;

pub use config::{CatalogConfig, DraftConfig, DEFAULT_CATALOG_BASE_URL, ROSTER_SIZE, TEAM_SIZE};
pub use entity::CharacterId;
pub use rng::{DraftRng, DraftRngState};
