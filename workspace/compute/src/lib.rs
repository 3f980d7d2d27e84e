//! Reporting engine for the parlay ledger.
//!
//! The backend delegates all report semantics to this crate: compiling the
//! optional filters into a ledger query and reducing the matching parlays
//! to summary statistics.

pub mod error;
pub mod report;

pub use report::summary;
