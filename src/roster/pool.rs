//! The candidate pool for one session.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Combatant;
use crate::core::CharacterId;

/// Ordered candidates for a draft.
///
/// Rosters produced by `RosterAcquirer` hold exactly `ROSTER_SIZE`
/// distinct combatants. Backed by a persistent vector so snapshots
/// share structure instead of copying.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vector<Combatant>,
}

impl Roster {
    /// Build a roster in the given order.
    pub fn new(members: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at a roster position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Combatant> {
        self.members.front()
    }

    /// Member with the given identifier.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&Combatant> {
        self.members.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CharacterId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<CharacterId> {
        self.members.iter().map(Combatant::id).collect()
    }
}

impl FromIterator<Combatant> for Roster {
    fn from_iter<I: IntoIterator<Item = Combatant>>(iter: I) -> Self {
        Self::new(iter)
    }
}
