//! Battle scoring.
//!
//! ```text
//! player_total   = base + floor(base * 15%) + luck      luck in 0..50
//! computer_total = base - floor(base * 10%)
//! ```
//!
//! The computer wins only with a strictly higher total; ties go to the
//! player. Percentages are applied in integer arithmetic, which equals
//! the floor of the exact product.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{DraftConfig, DraftRng};
use crate::draft::Team;

/// Winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

/// Final scores with their breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub player_base: u32,
    pub player_bonus: u32,
    pub luck: u32,
    pub player_total: u32,
    pub computer_base: u32,
    pub computer_penalty: u32,
    pub computer_total: u32,
    pub winner: Side,
}

impl MatchOutcome {
    /// Totals were equal and the tie went to the player.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.player_total == self.computer_total
    }
}

/// Scores two teams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleResolver {
    player_bonus_percent: u32,
    computer_penalty_percent: u32,
    luck_ceiling: u32,
}

impl Default for BattleResolver {
    fn default() -> Self {
        Self::from_config(&DraftConfig::default())
    }
}

impl BattleResolver {
    pub fn from_config(config: &DraftConfig) -> Self {
        Self {
            player_bonus_percent: config.player_bonus_percent,
            computer_penalty_percent: config.computer_penalty_percent,
            luck_ceiling: config.luck_ceiling.max(1),
        }
    }

    /// Roll luck and score.
    pub fn resolve(&self, player: &Team, computer: &Team, rng: &mut DraftRng) -> MatchOutcome {
        let luck = rng.gen_range_usize(0..self.luck_ceiling as usize) as u32;
        self.score(player, computer, luck)
    }

    /// Score with a fixed luck value.
    #[must_use]
    pub fn score(&self, player: &Team, computer: &Team, luck: u32) -> MatchOutcome {
        self.score_totals(player.base_total(), computer.base_total(), luck)
    }

    /// Score from base totals directly.
    #[must_use]
    pub fn score_totals(&self, player_base: u32, computer_base: u32, luck: u32) -> MatchOutcome {
        let player_bonus = percent_of(player_base, self.player_bonus_percent);
        let computer_penalty = percent_of(computer_base, self.computer_penalty_percent);

        let player_total = player_base + player_bonus + luck;
        let computer_total = computer_base.saturating_sub(computer_penalty);

        let winner = if computer_total > player_total {
            Side::Computer
        } else {
            Side::Player
        };

        info!(player_total, computer_total, luck, ?winner, "battle resolved");

        MatchOutcome {
            player_base,
            player_bonus,
            luck,
            player_total,
            computer_base,
            computer_penalty,
            computer_total,
            winner,
        }
    }
}

fn percent_of(value: u32, percent: u32) -> u32 {
    (u64::from(value) * u64::from(percent) / 100) as u32
}
