//! Teams of three.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Combatant;
use crate::core::{CharacterId, TEAM_SIZE};

/// An ordered group of up to `TEAM_SIZE` combatants.
///
/// The player's team never repeats a member. The computer's team may, but
/// only when its draft runs out of distinct candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    members: SmallVec<[Combatant; TEAM_SIZE]>,
}

impl Team {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Team with the given members, in order.
    pub fn from_members(members: impl IntoIterator<Item = Combatant>) -> Self {
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

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= TEAM_SIZE
    }

    #[must_use]
    pub fn contains(&self, id: CharacterId) -> bool {
        self.members.iter().any(|c| c.id() == id)
    }

    pub(crate) fn push(&mut self, combatant: Combatant) {
        self.members.push(combatant);
    }

    /// Remove the member with `id`. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: CharacterId) -> bool {
        let before = self.members.len();
        self.members.retain(|c| c.id() != id);
        self.members.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    #[must_use]
    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    #[must_use]
    pub fn ids(&self) -> Vec<CharacterId> {
        self.members.iter().map(Combatant::id).collect()
    }

    /// Sum of `hp + attack + defense` over all members.
    #[must_use]
    pub fn base_total(&self) -> u32 {
        self.members.iter().map(Combatant::power).sum()
    }

    /// Whether any identifier appears twice.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.members
            .iter()
            .enumerate()
            .any(|(i, a)| self.members[i + 1..].iter().any(|b| a.id() == b.id()))
    }

    /// Progress label such as `"2/3"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.members.len(), TEAM_SIZE)
    }
}
