//! Character identification.
//!
//! Every character in the external catalog carries an integer identifier.
//! The engine wraps it in `CharacterId` so it cannot be confused with page
//! numbers, indices or stat values.
//!
//! ```
//! use portal_draft::core::CharacterId;
//!
//! let rick = CharacterId::new(1);
//! assert_eq!(rick.raw(), 1);
//! assert_eq!(format!("{}", rick), "Character(1)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a catalog character.
///
/// Two combatants with the same `CharacterId` are always value-identical,
/// since every derived stat is a pure function of the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Widened value used by stat derivation, so `id * 13` never overflows.
    #[must_use]
    pub(crate) const fn wide(self) -> u64 {
        self.0 as u64
    }
}

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}
