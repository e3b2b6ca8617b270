//! Aggregation execution and orchestration

use crate::error::AggregateError;
use crate::metrics::{EventSink, TracingSink};
use crate::providers::ProviderCatalog;
use crate::query::Query;
use crate::results::{AggregateResult, HitCount, HitTally};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Provider calls in flight at once unless configured otherwise
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Sums hit counts for a query across every provider in a catalog
///
/// The aggregator keeps no state between calls. Each call to
/// [`Aggregator::aggregate`] either sums every (term, provider) pair or stops
/// at the first failure and reports it.
pub struct Aggregator {
    /// Provider names and instances
    catalog: Arc<dyn ProviderCatalog>,
    /// Lifecycle event receiver
    events: Arc<dyn EventSink>,
    /// Upper bound on concurrent provider calls
    max_concurrency: usize,
}

impl Aggregator {
    /// Create an aggregator that logs through `tracing`
    pub fn new(catalog: Arc<dyn ProviderCatalog>) -> Self {
        Self {
            catalog,
            events: Arc::new(TracingSink),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Set the event sink
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Set the number of provider calls in flight; 1 runs them in order
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Aggregate hit counts for every term of `query` across all providers.
    ///
    /// Never fails: errors are reported through `success = false` on the
    /// returned result.
    pub async fn aggregate(&self, query: &str) -> AggregateResult {
        let id = Uuid::new_v4();
        self.run(id, query)
            .instrument(info_span!("aggregate", %id))
            .await
    }

    async fn run(&self, id: Uuid, raw: &str) -> AggregateResult {
        let start = Instant::now();

        let query = Query::parse(raw);
        let names = self.catalog.names();
        self.events
            .aggregation_started(id, raw, query.len(), names.len());

        let result = match self.fan_out(&query.terms, names).await {
            Ok(tally) => AggregateResult::success(tally.into_hits(), start.elapsed()),
            Err(e) => AggregateResult::failure(&e, start.elapsed()),
        };

        self.events.aggregation_finished(id, raw, &result);
        result
    }

    /// Query every (term, provider) pair and tally the counts per provider.
    ///
    /// Pairs are issued term-major in provider order. The first error to
    /// complete is returned and the remaining calls are dropped.
    async fn fan_out(
        &self,
        terms: &[String],
        names: Vec<String>,
    ) -> Result<HitTally, AggregateError> {
        let mut tally = HitTally::new(names);
        let labels = tally.names().to_vec();
        let names = &labels;

        let provider_count = names.len();
        let pairs = (0..terms.len())
            .flat_map(move |t| (0..provider_count).map(move |p| (t, p)));

        let mut calls = stream::iter(pairs)
            .map(|(t, p)| async move { (p, self.call(&names[p], &terms[t]).await) })
            .buffer_unordered(self.max_concurrency);

        while let Some((index, outcome)) = calls.next().await {
            tally.add(index, outcome?);
        }

        Ok(tally)
    }

    /// Resolve one provider and ask it for one term's hit count
    async fn call(&self, name: &str, term: &str) -> Result<HitCount, AggregateError> {
        let start = Instant::now();

        let outcome = match self.catalog.resolve(name) {
            Ok(provider) => provider.query(term).await.map_err(AggregateError::from),
            Err(e) => Err(e.into()),
        };

        match &outcome {
            Ok(hits) => self
                .events
                .provider_succeeded(name, term, *hits, start.elapsed()),
            Err(e) => self.events.provider_failed(name, term, e, start.elapsed()),
        }

        outcome
    }
}
