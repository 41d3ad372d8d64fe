//! Computer opponent drafting.

pub mod strategist;

pub use strategist::{OpponentStrategy, ThirdPick, WeakBiasStrategist};
