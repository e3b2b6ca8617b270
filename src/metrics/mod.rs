//! Metrics collection module
//!
//! Tracks aggregation counts, provider response times and error rates.
//! `Metrics` is fed through the `EventSink` trait.

mod events;

pub use events::{EventSink, NoopSink, Sinks, TracingSink};

use crate::error::AggregateError;
use crate::results::{AggregateResult, HitCount};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use uuid::Uuid;

/// Response times kept per provider
const RESPONSE_TIME_WINDOW: usize = 100;

/// Process-wide metrics collector
pub struct Metrics {
    /// Total aggregation count
    total_aggregations: AtomicU64,
    /// Aggregations that returned success=false
    failed_aggregations: AtomicU64,
    /// Per-provider counters
    providers: RwLock<HashMap<String, ProviderCounters>>,
}

#[derive(Debug, Default)]
struct ProviderCounters {
    successes: u64,
    errors: u64,
    response_times: VecDeque<u64>,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            total_aggregations: AtomicU64::new(0),
            failed_aggregations: AtomicU64::new(0),
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Record one provider call
    pub fn record_call(&self, provider: &str, elapsed: Duration, ok: bool) {
        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let counters = providers.entry(provider.to_string()).or_default();

        if ok {
            counters.successes += 1;
        } else {
            counters.errors += 1;
        }

        if counters.response_times.len() >= RESPONSE_TIME_WINDOW {
            counters.response_times.pop_front();
        }
        counters
            .response_times
            .push_back(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    }

    /// Get total aggregations
    pub fn total_aggregations(&self) -> u64 {
        self.total_aggregations.load(Ordering::Relaxed)
    }

    /// Get failed aggregations
    pub fn failed_aggregations(&self) -> u64 {
        self.failed_aggregations.load(Ordering::Relaxed)
    }

    /// Get average response time for a provider
    pub fn avg_response_time(&self, provider: &str) -> Option<u64> {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        providers.get(provider).and_then(ProviderCounters::avg_response_time)
    }

    /// Get reliability percentage for a provider
    pub fn reliability(&self, provider: &str) -> f64 {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        providers
            .get(provider)
            .map(ProviderCounters::reliability)
            .unwrap_or(100.0)
    }

    /// Serializable view of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);

        MetricsSnapshot {
            total_aggregations: self.total_aggregations(),
            failed_aggregations: self.failed_aggregations(),
            providers: providers
                .iter()
                .map(|(name, c)| {
                    (
                        name.clone(),
                        ProviderStats {
                            calls: c.successes + c.errors,
                            errors: c.errors,
                            avg_response_time_ms: c.avg_response_time(),
                            reliability: c.reliability(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl ProviderCounters {
    fn avg_response_time(&self) -> Option<u64> {
        if self.response_times.is_empty() {
            None
        } else {
            Some(self.response_times.iter().sum::<u64>() / self.response_times.len() as u64)
        }
    }

    fn reliability(&self) -> f64 {
        let total = self.successes + self.errors;
        if total == 0 {
            100.0
        } else {
            (self.successes as f64 / total as f64) * 100.0
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for Metrics {
    fn provider_succeeded(&self, provider: &str, _term: &str, _hits: HitCount, elapsed: Duration) {
        self.record_call(provider, elapsed, true);
    }

    fn provider_failed(&self, provider: &str, _term: &str, _error: &AggregateError, elapsed: Duration) {
        self.record_call(provider, elapsed, false);
    }

    fn aggregation_finished(&self, _id: Uuid, _query: &str, result: &AggregateResult) {
        self.total_aggregations.fetch_add(1, Ordering::Relaxed);
        if !result.success {
            self.failed_aggregations.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of the metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_aggregations: u64,
    pub failed_aggregations: u64,
    pub providers: BTreeMap<String, ProviderStats>,
}

/// Statistics for a single provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStats {
    pub calls: u64,
    pub errors: u64,
    pub avg_response_time_ms: Option<u64>,
    pub reliability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.record_call("google", Duration::from_millis(100), true);
        metrics.record_call("google", Duration::from_millis(300), false);

        assert_eq!(metrics.avg_response_time("google"), Some(200));
        assert_eq!(metrics.reliability("google"), 50.0);
        assert_eq!(metrics.reliability("bing"), 100.0);
        assert_eq!(metrics.avg_response_time("bing"), None);
    }

    #[test]
    fn test_response_time_window() {
        let metrics = Metrics::new();
        metrics.record_call("bing", Duration::from_millis(1000), true);
        for _ in 0..RESPONSE_TIME_WINDOW {
            metrics.record_call("bing", Duration::from_millis(10), true);
        }

        assert_eq!(metrics.avg_response_time("bing"), Some(10));
    }

    #[test]
    fn test_counts_aggregations() {
        let metrics = Metrics::new();
        let ok = AggregateResult::success(vec![], Duration::ZERO);
        let failed = AggregateResult::failure(&"boom", Duration::ZERO);

        metrics.aggregation_finished(Uuid::new_v4(), "a", &ok);
        metrics.aggregation_finished(Uuid::new_v4(), "b", &failed);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_aggregations, 2);
        assert_eq!(snapshot.failed_aggregations, 1);
    }
}
