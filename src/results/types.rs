//! Result type definitions

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Estimated number of matches for one term from one provider
pub type HitCount = u64;

/// Prefix of the error message reported for a failed aggregation
pub const ERROR_PREFIX: &str = "An error occurred during the search";

/// Summed hits for one provider across all terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderHits {
    /// Provider name as listed by the registry
    pub name: String,
    /// Sum of the provider's hit counts over every term
    pub hits: HitCount,
}

impl ProviderHits {
    pub fn new(name: impl Into<String>, hits: HitCount) -> Self {
        Self {
            name: name.into(),
            hits,
        }
    }
}

/// Outcome of a single aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Whether every provider call succeeded
    pub success: bool,
    /// Human-readable failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-provider totals in registry order, empty on failure
    #[serde(default)]
    pub providers: Vec<ProviderHits>,
    /// Sum over all providers, zero on failure
    #[serde(default)]
    pub total: HitCount,
    /// Wall-clock time of the whole aggregation
    pub response_time_ms: u64,
}

impl AggregateResult {
    /// Build a successful result, computing the grand total
    pub fn success(providers: Vec<ProviderHits>, elapsed: Duration) -> Self {
        let total = providers
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.hits));

        Self {
            success: true,
            error: None,
            providers,
            total,
            response_time_ms: elapsed_ms(elapsed),
        }
    }

    /// Build a failed result carrying the cause's message
    pub fn failure(cause: &impl std::fmt::Display, elapsed: Duration) -> Self {
        Self {
            success: false,
            error: Some(format!("{}: {}", ERROR_PREFIX, cause)),
            providers: Vec::new(),
            total: 0,
            response_time_ms: elapsed_ms(elapsed),
        }
    }

    /// Total for a provider, matched case-insensitively
    pub fn hits_for(&self, name: &str) -> Option<HitCount> {
        self.providers
            .iter()
            .find(|p| p.name.to_lowercase() == name.to_lowercase())
            .map(|p| p.hits)
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_totals() {
        let result = AggregateResult::success(
            vec![ProviderHits::new("google", 100), ProviderHits::new("bing", 30)],
            Duration::from_millis(12),
        );

        assert!(result.success);
        assert_eq!(result.total, 130);
        assert_eq!(result.hits_for("GOOGLE"), Some(100));
        assert_eq!(result.hits_for("yahoo"), None);
        assert_eq!(result.response_time_ms, 12);
    }

    #[test]
    fn test_failure_hides_totals() {
        let result = AggregateResult::failure(&"Bing API error", Duration::from_millis(3));

        assert!(!result.success);
        assert!(result.providers.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(
            result.error.as_deref(),
            Some("An error occurred during the search: Bing API error")
        );
    }

    #[test]
    fn test_json_shape() {
        let result = AggregateResult::success(
            vec![ProviderHits::new("google", 5)],
            Duration::from_millis(1),
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 5);
        assert_eq!(json["responseTimeMs"], 1);
        assert_eq!(json["providers"][0]["name"], "google");
        assert!(json.get("error").is_none());
    }
}
