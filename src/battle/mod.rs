//! Battle resolution: asymmetric scoring and the tie-break.

pub mod resolver;

pub use resolver::{BattleResolver, MatchOutcome, Side};
