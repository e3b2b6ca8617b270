//! Application state shared across handlers

use crate::aggregate::Aggregator;
use crate::config::Settings;
use crate::metrics::{Metrics, Sinks, TracingSink};
use crate::providers::ProviderCatalog;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Aggregation executor
    pub aggregator: Arc<Aggregator>,
    /// Aggregation metrics
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create new application state around a provider catalog
    pub fn new(settings: Settings, catalog: Arc<dyn ProviderCatalog>) -> Self {
        let metrics = Arc::new(Metrics::new());
        let events = Sinks::new()
            .with(Arc::new(TracingSink))
            .with(metrics.clone());

        let aggregator = Aggregator::new(catalog)
            .with_events(Arc::new(events))
            .with_max_concurrency(settings.aggregation.max_concurrency);

        Self {
            settings: Arc::new(settings),
            aggregator: Arc::new(aggregator),
            metrics,
        }
    }

    /// Longest accepted search string
    pub fn max_query_length(&self) -> usize {
        self.settings.server.max_query_length
    }
}
