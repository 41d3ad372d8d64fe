//! Combatants: catalog characters with derived battle stats.
//!
//! Stats are a pure function of the character identifier:
//!
//! ```text
//! hp      = 100 + (id * 7)  mod 150
//! attack  =  50 + (id * 11) mod 100
//! defense =  30 + (id * 13) mod 70
//! total   = hp + attack + defense
//! ```
//!
//! so the same character always has the same stats, in every session.
//!
//! ```
//! use portal_draft::cards::{Combatant, CharacterRecord};
//!
//! let rick = Combatant::generate(CharacterRecord::new(1u32, "Rick Sanchez", "rick.png"));
//! assert_eq!((rick.hp, rick.attack, rick.defense), (107, 61, 43));
//! assert_eq!(rick.total, 211);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::CharacterId;

use super::abilities::{Ability, AbilityTable};
use super::record::CharacterRecord;

/// Lowest possible `total`.
pub const MIN_TOTAL: u32 = 180;

/// Upper bound on `total` implied by the moduli.
pub const MAX_TOTAL: u32 = 549;

/// Derived battle stats for one identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub total: u32,
}

impl Stats {
    /// Derive stats for an identifier.
    #[must_use]
    pub const fn for_id(id: CharacterId) -> Self {
        let id = id.wide();
        let hp = 100 + ((id * 7) % 150) as u32;
        let attack = 50 + ((id * 11) % 100) as u32;
        let defense = 30 + ((id * 13) % 70) as u32;
        Self {
            hp,
            attack,
            defense,
            total: hp + attack + defense,
        }
    }
}

/// Star tier shown on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub const fn from_total(total: u32) -> Self {
        if total > 250 {
            Rarity::Legendary
        } else if total > 200 {
            Rarity::Rare
        } else {
            Rarity::Common
        }
    }

    /// Number of stars to draw.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
        }
    }
}

/// A character ready to be drafted.
///
/// Immutable after generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    #[serde(flatten)]
    pub record: CharacterRecord,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub total: u32,
    pub ability: Ability,
}

impl Combatant {
    /// Generate with the built-in ability table.
    #[must_use]
    pub fn generate(record: CharacterRecord) -> Self {
        Self::generate_with(record, AbilityTable::shared())
    }

    /// Generate with a custom ability table.
    #[must_use]
    pub fn generate_with(record: CharacterRecord, abilities: &AbilityTable) -> Self {
        let stats = Stats::for_id(record.id);
        let ability = abilities.lookup(&record);
        Self {
            record,
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            total: stats.total,
            ability,
        }
    }

    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.record.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.record.image
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            total: self.total,
        }
    }

    /// `hp + attack + defense`, the value the battle scores.
    #[must_use]
    pub fn power(&self) -> u32 {
        self.hp + self.attack + self.defense
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        Rarity::from_total(self.total)
    }

    /// First word of the name, for compact team listings.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.record
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&self.record.name)
    }

    /// Below the opponent's weak/strong threshold.
    #[must_use]
    pub fn is_weak(&self, threshold: u32) -> bool {
        self.total < threshold
    }
}
