//! Station consolidation service
//!
//! This module implements the core entity-resolution pipeline: normalizing
//! source-shaped records into the common station model, matching records that
//! describe the same physical station, merging matched records while
//! preserving temporal history, and folding an ordered record sequence into
//! a deduplicated station list.
//!
//! The fold is deliberately sequential and first-match-wins: each matching
//! decision depends on the full accumulator state built by all prior steps,
//! so results are deterministic for a fixed input order but not invariant
//! under reordering. That order dependence is a tested contract, not an
//! implementation accident.

pub mod driver;
pub mod matcher;
pub mod merger;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use driver::Consolidator;
pub use stats::ConsolidationStats;
