//! `SearchProvider` backed by an HTTP hit-count API

use super::traits::{HitEndpoint, SearchProvider};
use crate::error::{ProviderError, ProviderErrorKind};
use crate::network::HttpClient;
use crate::results::HitCount;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Runs a `HitEndpoint` through the shared HTTP client
pub struct HttpProvider<E> {
    endpoint: E,
    client: HttpClient,
}

impl<E: HitEndpoint> HttpProvider<E> {
    pub fn new(endpoint: E, client: HttpClient) -> Self {
        Self { endpoint, client }
    }

    fn error(&self, term: &str, kind: ProviderErrorKind) -> ProviderError {
        ProviderError::new(self.endpoint.name(), term, kind)
    }
}

#[async_trait]
impl<E: HitEndpoint> SearchProvider for HttpProvider<E> {
    fn name(&self) -> &str {
        self.endpoint.name()
    }

    async fn query(&self, term: &str) -> Result<HitCount, ProviderError> {
        let request = self
            .endpoint
            .request(term)
            .map_err(|e| self.error(term, ProviderErrorKind::Request(e.to_string())))?;

        debug!("Querying {} for '{}'", self.name(), term);

        // The request URL can carry credentials as query parameters.
        let response = self.client.execute(request).await.map_err(|e| {
            let e = e.without_url();
            warn!("Request failed for {}: {}", self.name(), e);
            let kind = if e.is_timeout() {
                ProviderErrorKind::Timeout
            } else {
                ProviderErrorKind::Network(e.to_string())
            };
            self.error(term, kind)
        })?;

        if !response.is_success() {
            warn!("{} returned HTTP {}", self.name(), response.status);
            return Err(self.error(term, ProviderErrorKind::Status(response.status)));
        }

        let hits = self.endpoint.hits(&response).map_err(|e| {
            warn!("Failed to parse response from {}: {}", self.name(), e);
            self.error(term, ProviderErrorKind::Payload(e.to_string()))
        })?;

        debug!("{} reported {} hits for '{}'", self.name(), hits, term);
        Ok(hits)
    }
}
