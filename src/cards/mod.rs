//! Characters, abilities and stat generation.
//!
//! - `CharacterRecord`: what the catalog supplies (immutable)
//! - `AbilityTable`: signature abilities with a generic fallback
//! - `Combatant`: a record plus derived hp/attack/defense/total/ability

pub mod abilities;
pub mod combatant;
pub mod record;

pub use abilities::{Ability, AbilityTable};
pub use combatant::{Combatant, Rarity, Stats, MAX_TOTAL, MIN_TOTAL};
pub use record::{CharacterRecord, PlaceRef};
