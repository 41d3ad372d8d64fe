//! Session state machine and its async driver.
//!
//! - `Session`: synchronous phases, teams and outcome, guarded by a
//!   generation counter
//! - `GameSession`: runs a `Session` against a catalog on tokio and
//!   publishes `SessionSnapshot`s to subscribers

pub mod driver;
pub mod machine;
pub mod phase;
pub mod snapshot;

pub use driver::GameSession;
pub use machine::Session;
pub use phase::{AcquisitionTicket, Generation, ResolutionTicket, SessionPhase};
pub use snapshot::{Scores, SessionSnapshot};
