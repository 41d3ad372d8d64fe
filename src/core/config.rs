//! Tunable parameters for drafting, scoring and catalog access.
//!
//! - `DraftConfig`: page range, opponent bias, scoring modifiers, pacing
//! - `CatalogConfig`: where the character catalog lives
//!
//! Roster and team sizes are fixed by the game's rules and live here as
//! constants rather than configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of candidates offered in one session.
pub const ROSTER_SIZE: usize = 5;

/// Members per team.
pub const TEAM_SIZE: usize = 3;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Draft and battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Number of catalog pages; roster pages are drawn from `1..=page_count`.
    /// Must be recomputed if the catalog grows or shrinks.
    pub page_count: u32,

    /// Combatants with `total` below this are "weak" to the opponent.
    pub weak_threshold: u32,

    /// Probability the opponent tries for another weak pick in its third slot.
    pub weak_bias: f64,

    /// Player bonus as a percentage of the player's base total.
    pub player_bonus_percent: u32,

    /// Computer penalty as a percentage of the computer's base total.
    pub computer_penalty_percent: u32,

    /// Luck is drawn uniformly from `0..luck_ceiling`.
    pub luck_ceiling: u32,

    /// Pause between entering `Battle` and revealing the result.
    #[serde(with = "duration_millis")]
    pub resolution_delay: Duration,

    /// Session seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            page_count: 42,
            weak_threshold: 300,
            weak_bias: 0.8,
            player_bonus_percent: 15,
            computer_penalty_percent: 10,
            luck_ceiling: 50,
            resolution_delay: Duration::from_millis(2000),
            seed: None,
        }
    }
}

impl DraftConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the catalog page count.
    #[must_use]
    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = pages;
        self
    }

    /// Set the opponent's weak-pick bias.
    #[must_use]
    pub fn with_weak_bias(mut self, bias: f64) -> Self {
        self.weak_bias = bias;
        self
    }

    /// Set the result reveal delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Check the values the engine cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_count == 0 {
            return Err(ConfigError::InvalidPageCount);
        }
        if !(0.0..=1.0).contains(&self.weak_bias) {
            return Err(ConfigError::InvalidWeakBias(self.weak_bias));
        }
        if self.luck_ceiling == 0 {
            return Err(ConfigError::InvalidLuckCeiling);
        }
        Ok(())
    }
}

/// HTTP catalog location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL without trailing slash, e.g. `https://rickandmortyapi.com/api`.
    pub base_url: String,

    /// Per-request timeout.
    #[serde(with = "duration_millis")]
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl CatalogConfig {
    /// Read `CATALOG_BASE_URL` and `CATALOG_TIMEOUT_SECS`, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("CATALOG_BASE_URL").unwrap_or(defaults.base_url);
        let timeout = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
