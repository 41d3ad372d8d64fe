//! Roster acquisition from the external catalog.
//!
//! - `CatalogSource`: the page-fetch capability the engine depends on
//! - `HttpCatalog` / `StaticCatalog`: network and in-memory sources
//! - `RosterAcquirer`: random page, shuffle, take five, generate stats

pub mod acquirer;
pub mod catalog;
pub mod pool;

pub use acquirer::RosterAcquirer;
pub use catalog::{CatalogSource, HttpCatalog, PageInfo, StaticCatalog};
pub use pool::Roster;
