//! Opponent drafting.
//!
//! The computer drafts from the whole roster, including characters the
//! player already picked. `WeakBiasStrategist` deliberately favors weak
//! combatants (`total < weak_threshold`):
//!
//! 1. Split the roster into weak and strong, keeping roster order.
//! 2. Two or more weak: shuffle them and take two. Exactly one: take it.
//! 3. Third slot: with probability `weak_bias`, and only if there are more
//!    weak combatants than picks so far, take the first weak one not yet
//!    picked (falling back to the lowest-total strong one, then the first
//!    roster member). Otherwise take a random strong one, or a random
//!    roster member when nothing is strong.
//! 4. Fill any remaining slots with the first unpicked roster members,
//!    repeating the first roster member only when every member is taken.

use tracing::debug;

use crate::cards::Combatant;
use crate::core::{DraftConfig, DraftRng, TEAM_SIZE};
use crate::draft::Team;
use crate::roster::Roster;

/// Strategy the computer uses to build its team.
pub trait OpponentStrategy: Send + Sync {
    /// Draft a full team from the roster.
    fn draft(&self, roster: &Roster, rng: &mut DraftRng) -> Team;
}

/// Which branch filled the third slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThirdPick {
    /// Two weak picks already filled two slots and nothing decided the third.
    NotDrawn,
    /// Another weak combatant.
    RemainingWeak,
    /// No weak combatant was left; took the weakest strong one.
    WeakestStrong,
    /// No weak or strong combatant was left; took the first roster member.
    RosterFront,
    /// Random strong combatant.
    RandomStrong,
    /// Random roster member (roster has no strong combatants).
    RandomAny,
}

/// The default computer opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct WeakBiasStrategist {
    weak_threshold: u32,
    weak_bias: f64,
}

impl Default for WeakBiasStrategist {
    fn default() -> Self {
        Self::from_config(&DraftConfig::default())
    }
}

impl WeakBiasStrategist {
    pub fn new(weak_threshold: u32, weak_bias: f64) -> Self {
        Self {
            weak_threshold,
            weak_bias,
        }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.weak_threshold, config.weak_bias)
    }

    /// Draft and report which branch produced the third pick.
    pub fn draft_traced(&self, roster: &Roster, rng: &mut DraftRng) -> (Team, ThirdPick) {
        let members: Vec<&Combatant> = roster.iter().collect();
        let (weak, strong): (Vec<&Combatant>, Vec<&Combatant>) = members
            .iter()
            .copied()
            .partition(|c| c.is_weak(self.weak_threshold));

        let mut picks: Vec<&Combatant> = Vec::with_capacity(TEAM_SIZE);

        if weak.len() >= 2 {
            let mut shuffled = weak.clone();
            rng.shuffle(&mut shuffled);
            picks.extend_from_slice(&shuffled[..2]);
        } else if let [only] = weak.as_slice() {
            picks.push(*only);
        }

        let mut third = ThirdPick::NotDrawn;
        if picks.len() < TEAM_SIZE {
            let r = rng.unit();
            let choice = if r < self.weak_bias && weak.len() > picks.len() {
                let remaining = weak
                    .iter()
                    .find(|w| !picks.iter().any(|p| p.id() == w.id()));
                match remaining {
                    Some(&w) => {
                        third = ThirdPick::RemainingWeak;
                        Some(w)
                    }
                    None => match strong.iter().min_by_key(|c| c.total) {
                        Some(&s) => {
                            third = ThirdPick::WeakestStrong;
                            Some(s)
                        }
                        None => {
                            third = ThirdPick::RosterFront;
                            members.first().copied()
                        }
                    },
                }
            } else if let Some(&s) = rng.choose(&strong) {
                third = ThirdPick::RandomStrong;
                Some(s)
            } else {
                third = ThirdPick::RandomAny;
                rng.choose(&members).copied()
            };
            picks.extend(choice);
        }

        while picks.len() < TEAM_SIZE {
            let next = members
                .iter()
                .find(|m| !picks.iter().any(|p| p.id() == m.id()))
                .or_else(|| members.first());
            match next {
                Some(&m) => picks.push(m),
                // Empty roster: nothing to fill with.
                None => break,
            }
        }

        let team = Team::from_members(picks.into_iter().cloned());
        debug!(
            weak = weak.len(),
            strong = strong.len(),
            ?third,
            ids = ?team.ids(),
            "opponent draft"
        );
        (team, third)
    }
}

impl OpponentStrategy for WeakBiasStrategist {
    fn draft(&self, roster: &Roster, rng: &mut DraftRng) -> Team {
        self.draft_traced(roster, rng).0
    }
}
