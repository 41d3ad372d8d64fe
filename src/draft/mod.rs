//! Player drafting: teams and the selection controller.

pub mod controller;
pub mod team;

pub use controller::{DraftController, DraftStep, IgnoreReason};
pub use team::Team;
