//! Provider traits and types

use crate::error::{ProviderError, UnknownProviderError};
use crate::results::HitCount;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// A source of hit-count estimates for single terms
///
/// Each call performs one outbound request. Implementations do not retry
/// and keep no state between calls.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Estimate the total number of matches for `term`
    async fn query(&self, term: &str) -> Result<HitCount, ProviderError>;
}

/// Read-only view of the configured providers
pub trait ProviderCatalog: Send + Sync {
    /// Every provider name, in a fixed order
    fn names(&self) -> Vec<String>;

    /// Look up a provider by name, ignoring case
    fn resolve(&self, name: &str) -> Result<Arc<dyn SearchProvider>, UnknownProviderError>;
}

/// Wire format of one HTTP hit-count API
///
/// The endpoint only builds requests and reads responses; `HttpProvider`
/// performs the actual call.
pub trait HitEndpoint: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Build the HTTP request for a term
    fn request(&self, term: &str) -> anyhow::Result<ProviderRequest>;

    /// Read the hit count from a successful response
    fn hits(&self, response: &ProviderResponse) -> anyhow::Result<HitCount>;
}

/// HTTP GET request to be made for a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from a provider request
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Build a response by hand, mostly for parser tests
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
