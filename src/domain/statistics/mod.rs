//! Critical Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived from the record store, NEVER primary
//! 2. Counters are never negative
//! 3. A summary is replaced as a whole, never field by field
//! 4. Stale statistics are acceptable (last-known value survives a failed load)

pub mod entity;
pub use entity::{StatSummary, StatsState};
