//! Aggregation lifecycle events

use crate::error::AggregateError;
use crate::results::{AggregateResult, HitCount};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Receiver of aggregation lifecycle events
///
/// Passed into the `Aggregator` explicitly; every method defaults to a
/// no-op so sinks only implement what they care about.
pub trait EventSink: Send + Sync {
    fn aggregation_started(&self, _id: Uuid, _query: &str, _terms: usize, _providers: usize) {}

    fn provider_succeeded(&self, _provider: &str, _term: &str, _hits: HitCount, _elapsed: Duration) {}

    fn provider_failed(
        &self,
        _provider: &str,
        _term: &str,
        _error: &AggregateError,
        _elapsed: Duration,
    ) {
    }

    fn aggregation_finished(&self, _id: Uuid, _query: &str, _result: &AggregateResult) {}
}

/// Sink that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {}

/// Sink that writes events as `tracing` log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn aggregation_started(&self, id: Uuid, query: &str, terms: usize, providers: usize) {
        debug!(
            %id,
            "Aggregating '{}' ({} terms x {} providers)",
            query, terms, providers
        );
    }

    fn provider_succeeded(&self, provider: &str, term: &str, hits: HitCount, elapsed: Duration) {
        debug!(
            "Provider {} returned {} hits for '{}' in {:?}",
            provider, hits, term, elapsed
        );
    }

    fn provider_failed(&self, provider: &str, term: &str, err: &AggregateError, elapsed: Duration) {
        warn!(
            "Provider {} failed for '{}' after {:?}: {}",
            provider, term, elapsed, err
        );
    }

    fn aggregation_finished(&self, id: Uuid, query: &str, result: &AggregateResult) {
        if result.success {
            info!(
                %id,
                "Total aggregation time for query '{}' took {} ms",
                query, result.response_time_ms
            );
        } else {
            error!(
                %id,
                "Aggregation failed for query '{}' after {} ms: {}",
                query,
                result.response_time_ms,
                result.error.as_deref().unwrap_or_default()
            );
        }
    }
}

/// Forwards every event to each inner sink in order
#[derive(Clone, Default)]
pub struct Sinks(Vec<Arc<dyn EventSink>>);

impl Sinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.0.push(sink);
        self
    }
}

impl EventSink for Sinks {
    fn aggregation_started(&self, id: Uuid, query: &str, terms: usize, providers: usize) {
        for sink in &self.0 {
            sink.aggregation_started(id, query, terms, providers);
        }
    }

    fn provider_succeeded(&self, provider: &str, term: &str, hits: HitCount, elapsed: Duration) {
        for sink in &self.0 {
            sink.provider_succeeded(provider, term, hits, elapsed);
        }
    }

    fn provider_failed(&self, provider: &str, term: &str, err: &AggregateError, elapsed: Duration) {
        for sink in &self.0 {
            sink.provider_failed(provider, term, err, elapsed);
        }
    }

    fn aggregation_finished(&self, id: Uuid, query: &str, result: &AggregateResult) {
        for sink in &self.0 {
            sink.aggregation_finished(id, query, result);
        }
    }
}
