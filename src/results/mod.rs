//! Aggregation result types
//!
//! `AggregateResult` is what every aggregation returns, success or not.
//! `HitTally` accumulates per-provider totals while an aggregation runs.

mod tally;
mod types;

pub use tally::HitTally;
pub use types::*;
