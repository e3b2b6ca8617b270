//! Aggregation module
//!
//! Fans every term of a query out to every registered provider and sums
//! the hit counts into one `AggregateResult`.

mod executor;

pub use executor::{Aggregator, DEFAULT_MAX_CONCURRENCY};
