//! Indexed accumulator for per-provider hit totals

use super::types::{HitCount, ProviderHits};

/// Running totals for one aggregation, indexed by provider position
#[derive(Debug, Clone)]
pub struct HitTally {
    names: Vec<String>,
    totals: Vec<HitCount>,
}

impl HitTally {
    /// Start a tally with every provider at zero
    pub fn new(names: Vec<String>) -> Self {
        let totals = vec![0; names.len()];
        Self { names, totals }
    }

    /// Add hits to the provider at `index`
    pub fn add(&mut self, index: usize, hits: HitCount) {
        if let Some(total) = self.totals.get_mut(index) {
            *total = total.saturating_add(hits);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Total recorded so far for the provider at `index`
    pub fn get(&self, index: usize) -> Option<HitCount> {
        self.totals.get(index).copied()
    }

    /// Consume the tally into labelled totals, in registry order
    pub fn into_hits(self) -> Vec<ProviderHits> {
        self.names
            .into_iter()
            .zip(self.totals)
            .map(|(name, hits)| ProviderHits { name, hits })
            .collect()
    }
}
