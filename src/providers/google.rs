//! Google Custom Search JSON API

use super::traits::*;
use crate::results::HitCount;
use anyhow::Result as AnyhowResult;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search endpoint
pub struct Google {
    name: String,
    base_url: String,
    api_key: String,
    cx: String,
}

impl Google {
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            name: "google".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            cx: cx.into(),
        }
    }

    /// Register under a different name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Point at a different API address
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    search_information: Option<SearchInformation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchInformation {
    /// Google reports the count as a decimal string
    total_results: Option<String>,
}

impl HitEndpoint for Google {
    fn name(&self) -> &str {
        &self.name
    }

    fn request(&self, term: &str) -> AnyhowResult<ProviderRequest> {
        Ok(ProviderRequest::get(&self.base_url)
            .param("key", &self.api_key)
            .param("cx", &self.cx)
            .param("q", term))
    }

    fn hits(&self, response: &ProviderResponse) -> AnyhowResult<HitCount> {
        let body: SearchResponse = response.json()?;

        let Some(total) = body.search_information.and_then(|s| s.total_results) else {
            return Ok(0);
        };

        total
            .trim()
            .parse::<HitCount>()
            .map_err(|_| anyhow::anyhow!("totalResults is not a hit count: {:?}", total))
    }
}
