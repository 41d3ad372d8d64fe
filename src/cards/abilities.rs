//! Special abilities.
//!
//! Well-known characters have a signature ability. Everyone else gets one
//! of five generic abilities picked by `id % 5`. Lookup is total and
//! deterministic.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::record::CharacterRecord;

/// Named ability with flavor text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

impl Ability {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

const SIGNATURE_ABILITIES: [(&str, &str, &str); 10] = [
    ("Rick Sanchez", "Drunken Portal", "Escapes through a portal and comes back drunker (+50 ATK)"),
    ("Morty Smith", "Extreme Anxiety", "Screams so loud the enemy is stunned (+30 DEF)"),
    ("Summer Smith", "Instagram Influencer", "Distracts the enemy with selfies (-20 enemy ATK)"),
    ("Beth Smith", "Horse Surgery", "Patches up random wounds (+40 HP)"),
    ("Jerry Smith", "Being Pathetic", "So pathetic nobody wants to hit him (+60 DEF)"),
    ("Birdperson", "Majestic Flight", "Dodges everything by staying airborne (+45 DEF)"),
    ("Squanchy", "Squanchify", "Transforms and squanches everything (+70 ATK)"),
    ("Mr. Poopybutthole", "Ooh-wee!", "Cheers the team so hard everyone improves (+25 ALL)"),
    ("Evil Morty", "Manipulation", "Controls weak minds (+80 ATK)"),
    ("Mr. Meeseeks", "Look at Me!", "Completes one task and vanishes (+100 ATK, -100 HP)"),
];

/// Number of generic fallback abilities.
pub const GENERIC_ABILITY_COUNT: u64 = 5;

fn generic_ability(record: &CharacterRecord) -> Ability {
    match record.id.wide() % GENERIC_ABILITY_COUNT {
        0 => Ability::new(
            "Dimensional Shout",
            format!("Yells \"{}\" and confuses the enemy (+35 ATK)", record.name),
        ),
        1 => Ability::new("Senseless Dance", "Dances so badly it distracts (+30 DEF)"),
        2 => Ability::new("Questionable Existence", "Nobody knows if it really exists (+40 HP)"),
        3 => Ability::new("Toxic Burp", "Belches interdimensional toxins (+45 ATK)"),
        _ => Ability::new(
            "Existential Crisis",
            "Questions everything and becomes unpredictable (+50 ATK)",
        ),
    }
}

/// Signature abilities keyed by exact character name.
///
/// ```
/// use portal_draft::cards::{AbilityTable, CharacterRecord};
///
/// let table = AbilityTable::standard();
/// let rick = CharacterRecord::new(1u32, "Rick Sanchez", "rick.png");
/// assert_eq!(table.lookup(&rick).name, "Drunken Portal");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityTable {
    signatures: FxHashMap<String, Ability>,
}

impl AbilityTable {
    /// Create a table with no signature abilities (everyone gets a generic one).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for (character, name, description) in SIGNATURE_ABILITIES {
            table.register(character, Ability::new(name, description));
        }
        table
    }

    /// Shared built-in table.
    pub fn shared() -> &'static AbilityTable {
        static TABLE: OnceLock<AbilityTable> = OnceLock::new();
        TABLE.get_or_init(AbilityTable::standard)
    }

    /// Register or replace a signature ability.
    pub fn register(&mut self, character_name: impl Into<String>, ability: Ability) {
        self.signatures.insert(character_name.into(), ability);
    }

    /// Number of signature entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Signature ability if the name is known, otherwise the generic fallback.
    #[must_use]
    pub fn lookup(&self, record: &CharacterRecord) -> Ability {
        self.signatures
            .get(&record.name)
            .cloned()
            .unwrap_or_else(|| generic_ability(record))
    }
}
