//! The human side of the draft.
//!
//! Selection is lenient: anything out of contract (a full team, a repeat
//! pick, an unknown character) is ignored rather than reported as an
//! error, so the UI can forward every click unfiltered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CharacterId;
use crate::roster::Roster;

use super::team::Team;

/// Why a selection did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Team already has three members.
    TeamFull,
    /// Character is already on the team.
    AlreadySelected,
    /// Character is not in the current roster.
    NotInRoster,
    /// The session is not accepting picks.
    NotSelecting,
}

/// Result of one `select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStep {
    Ignored(IgnoreReason),
    /// Added; the team is still short.
    Added,
    /// Added; the team is now complete.
    Completed,
}

impl DraftStep {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, DraftStep::Ignored(_))
    }
}

/// Tracks the player's picks against one roster.
#[derive(Clone, Debug, Default)]
pub struct DraftController {
    team: Team,
}

impl DraftController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Add a roster member to the team.
    pub fn select(&mut self, roster: &Roster, id: CharacterId) -> DraftStep {
        if self.team.is_full() {
            return DraftStep::Ignored(IgnoreReason::TeamFull);
        }
        if self.team.contains(id) {
            return DraftStep::Ignored(IgnoreReason::AlreadySelected);
        }
        let Some(combatant) = roster.get(id) else {
            return DraftStep::Ignored(IgnoreReason::NotInRoster);
        };

        self.team.push(combatant.clone());
        debug!(%id, picked = self.team.len(), "player pick");

        if self.team.is_full() {
            DraftStep::Completed
        } else {
            DraftStep::Added
        }
    }

    /// Drop a member from the team. Returns whether it was present.
    pub fn deselect(&mut self, id: CharacterId) -> bool {
        self.team.remove(id)
    }

    pub fn reset(&mut self) {
        self.team.clear();
    }
}
