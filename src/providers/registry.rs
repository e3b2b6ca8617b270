//! Provider registry for resolving names to search providers

use super::traits::{ProviderCatalog, SearchProvider};
use crate::error::{RegistryError, UnknownProviderError};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all configured search providers
///
/// Providers are kept in registration order, which is the order `names()`
/// reports and the order aggregation results are labelled in. Lookups ignore
/// case, including outside ASCII.
pub struct ProviderRegistry {
    /// Providers in registration order
    providers: Vec<Arc<dyn SearchProvider>>,
    /// Lowercased name -> position in `providers`
    index: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a provider under its own name
    pub fn register(&mut self, provider: Arc<dyn SearchProvider>) -> Result<(), RegistryError> {
        let key = provider.name().to_lowercase();
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateProvider {
                name: provider.name().to_string(),
            });
        }

        self.index.insert(key, self.providers.len());
        self.providers.push(provider);
        Ok(())
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SearchProvider>> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&i| self.providers.get(i))
    }

    /// Check if a provider exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ProviderCatalog for ProviderRegistry {
    fn names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    fn resolve(&self, name: &str) -> Result<Arc<dyn SearchProvider>, UnknownProviderError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| UnknownProviderError::new(name))
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
