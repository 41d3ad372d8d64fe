//! Error types.
//!
//! Only acquiring a roster can fail. Drafting and scoring are total over
//! well-formed input and report out-of-contract calls as ignored steps,
//! never as errors.

use thiserror::Error;

/// Failure talking to the character catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(String),

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

/// A roster could not be produced. Recoverable only by a new acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("page {page} yielded {found} usable characters, need {needed}")]
    InsufficientRoster {
        page: u32,
        found: usize,
        needed: usize,
    },

    #[error("roster has {found} members, need {needed}")]
    RosterSize { found: usize, needed: usize },
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("page_count must be at least 1")]
    InvalidPageCount,

    #[error("weak_bias must be within [0, 1], got {0}")]
    InvalidWeakBias(f64),

    #[error("luck_ceiling must be at least 1")]
    InvalidLuckCeiling,
}
