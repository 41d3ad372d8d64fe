//! # portal-draft
//!
//! Drafting and resolution engine for a three-versus-three character card
//! battle. Characters come from an external catalog; the engine derives
//! their stats, lets a player draft a team, has a biased computer opponent
//! draft a counter-team, and scores the match.
//!
//! ## Design Principles
//!
//! 1. **Pure derivation**: a character's stats and ability depend only on
//!    its catalog record. The same character is the same combatant in
//!    every session.
//!
//! 2. **Lenient input**: out-of-contract picks are ignored, not errors.
//!    Only acquiring a roster can fail.
//!
//! 3. **Generation-checked transitions**: every asynchronous step carries
//!    the generation it was started in, so work from a replayed game can
//!    never touch the next one.
//!
//! ## Modules
//!
//! - `core`: identifiers, deterministic RNG, configuration
//! - `cards`: catalog records, abilities, stat generation
//! - `roster`: catalog access and roster acquisition
//! - `draft`: teams and player selection
//! - `opponent`: the computer's drafting strategy
//! - `battle`: scoring and tie-break
//! - `session`: phases, snapshots and the async driver
//!
//! ## Example
//!
//! ```
//! use portal_draft::{DraftConfig, GameSession, SessionPhase, StaticCatalog};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let config = DraftConfig::default().with_seed(7).with_page_count(1);
//! let mut game = GameSession::new(config, StaticCatalog::sample()).unwrap();
//! game.start().await.unwrap();
//!
//! let roster = game.snapshot().await.roster;
//! for member in roster.iter().take(3) {
//!     game.select(member.id()).await;
//! }
//! assert_eq!(game.snapshot().await.phase, SessionPhase::Battle);
//! # });
//! ```

pub mod battle;
pub mod cards;
pub mod core;
pub mod draft;
pub mod error;
pub mod opponent;
pub mod roster;
pub mod session;

pub use crate::core::{
    CatalogConfig, CharacterId, DraftConfig, DraftRng, DraftRngState, ROSTER_SIZE, TEAM_SIZE,
};

pub use crate::cards::{Ability, AbilityTable, CharacterRecord, Combatant, Rarity, Stats};

pub use crate::roster::{CatalogSource, HttpCatalog, Roster, RosterAcquirer, StaticCatalog};

pub use crate::draft::{DraftController, DraftStep, IgnoreReason, Team};

pub use crate::opponent::{OpponentStrategy, WeakBiasStrategist};

pub use crate::battle::{BattleResolver, MatchOutcome, Side};

pub use crate::session::{
    GameSession, Generation, Scores, Session, SessionPhase, SessionSnapshot,
};

pub use crate::error::{AcquisitionError, CatalogError, ConfigError};
