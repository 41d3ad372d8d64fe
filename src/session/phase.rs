//! Session phases and the tickets that move between them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DraftRng;

/// Top-level state of a session.
///
/// `Loading -> Selecting -> Battle -> Result`, and back to `Loading` on
/// replay from any phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    #[default]
    Loading,
    Selecting,
    Battle,
    Result,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::Loading => "loading",
            SessionPhase::Selecting => "selecting",
            SessionPhase::Battle => "battle",
            SessionPhase::Result => "result",
        };
        f.write_str(name)
    }
}

/// Counts acquisitions. Anything tagged with an older generation is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen{}", self.0)
    }
}

/// Handed out when a roster acquisition starts.
///
/// Carries its own RNG branch so the fetch can run without the session.
#[derive(Debug)]
pub struct AcquisitionTicket {
    pub generation: Generation,
    pub rng: DraftRng,
}

/// Handed out when a battle starts; redeem after `delay` to reveal the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTicket {
    pub generation: Generation,
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display_and_serde() {
        assert_eq!(SessionPhase::default(), SessionPhase::Loading);
        assert_eq!(SessionPhase::Battle.to_string(), "battle");
        assert_eq!(serde_json::to_string(&SessionPhase::Result).unwrap(), "\"result\"");
    }

    #[test]
    fn test_generation_ordering() {
        let g = Generation::default();
        assert!(g.next() > g);
        assert_eq!(g.next().next(), Generation(2));
        assert_eq!(Generation(3).to_string(), "gen3");
    }
}
