//! Read-only view of a session for the rendering layer.

use serde::{Deserialize, Serialize};

use crate::battle::MatchOutcome;
use crate::draft::Team;
use crate::roster::Roster;

use super::phase::{Generation, SessionPhase};

/// Totals shown while the battle plays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player_total: u32,
    pub computer_total: u32,
}

/// Everything a renderer needs, cloned out of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub generation: Generation,
    pub phase: SessionPhase,
    /// Empty until the roster is acquired.
    pub roster: Roster,
    pub player_team: Team,
    pub computer_team: Team,
    /// Player progress, e.g. `"2/3"`.
    pub team_counter: String,
    /// Set from `Battle` on.
    pub scores: Option<Scores>,
    /// Set only in `Result`.
    pub outcome: Option<MatchOutcome>,
    /// Last acquisition failure, while still `Loading`.
    pub last_error: Option<String>,
}
