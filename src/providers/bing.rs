//! Bing Web Search API v7

use super::traits::*;
use crate::results::HitCount;
use anyhow::Result as AnyhowResult;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.bing.microsoft.com";

/// Header carrying the subscription key
pub const API_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Bing Web Search endpoint
pub struct Bing {
    name: String,
    base_url: String,
    api_key: String,
}

impl Bing {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            name: "bing".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
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

    fn search_url(&self) -> String {
        format!("{}/v7.0/search", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    web_pages: Option<WebPages>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebPages {
    #[serde(default)]
    total_estimated_matches: HitCount,
}

impl HitEndpoint for Bing {
    fn name(&self) -> &str {
        &self.name
    }

    fn request(&self, term: &str) -> AnyhowResult<ProviderRequest> {
        Ok(ProviderRequest::get(self.search_url())
            .header(API_KEY_HEADER, &self.api_key)
            .param("q", term))
    }

    fn hits(&self, response: &ProviderResponse) -> AnyhowResult<HitCount> {
        let body: SearchResponse = response.json()?;
        // No webPages section means no web results
        Ok(body
            .web_pages
            .map(|w| w.total_estimated_matches)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bing_request() {
        let bing = Bing::new("secret");
        let request = bing.request("rust programming").unwrap();

        assert_eq!(request.url, "https://api.bing.microsoft.com/v7.0/search");
        assert_eq!(request.params.get("q").map(String::as_str), Some("rust programming"));
        assert_eq!(request.headers.get(API_KEY_HEADER).map(String::as_str), Some("secret"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let bing = Bing::new("k").with_base_url("http://localhost:8000/");
        assert_eq!(bing.search_url(), "http://localhost:8000/v7.0/search");
    }

    #[test]
    fn test_parses_estimated_matches() {
        let response = ProviderResponse::new(
            200,
            r#"{"_type": "SearchResponse", "webPages": {"totalEstimatedMatches": 4250000}}"#,
        );
        assert_eq!(Bing::new("k").hits(&response).unwrap(), 4_250_000);
    }

    #[test]
    fn test_missing_web_pages_is_zero() {
        let response = ProviderResponse::new(200, r#"{"_type": "SearchResponse"}"#);
        assert_eq!(Bing::new("k").hits(&response).unwrap(), 0);
    }

    #[test]
    fn test_rejects_negative_count() {
        let response = ProviderResponse::new(200, r#"{"webPages": {"totalEstimatedMatches": -5}}"#);
        assert!(Bing::new("k").hits(&response).is_err());
    }
}
