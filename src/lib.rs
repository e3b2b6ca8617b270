//! SearchHits-RS: aggregated hit-count estimates across web search providers
//!
//! A query is split into terms, every term is sent to every configured
//! provider, and the per-provider hit counts are summed into one result.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod metrics;
pub mod network;
pub mod providers;
pub mod query;
pub mod results;
pub mod web;

pub use aggregate::Aggregator;
pub use config::Settings;
pub use error::{AggregateError, ProviderError, ProviderErrorKind, UnknownProviderError};
pub use providers::{ProviderCatalog, ProviderRegistry, SearchProvider};
pub use results::{AggregateResult, HitCount, ProviderHits};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Longest search string accepted by the HTTP layer
pub const MAX_QUERY_LENGTH: usize = 75;
