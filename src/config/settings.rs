//! Settings structures for SearchHits-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub aggregation: AggregationSettings,
    pub providers: Vec<ProviderConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            outgoing: OutgoingSettings::default(),
            aggregation: AggregationSettings::default(),
            providers: default_providers(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARCHHITS_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("SEARCHHITS_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SEARCHHITS_BIND_ADDRESS") {
            self.server.bind_address = val;
        }

        for provider in &mut self.providers {
            let prefix = match provider.kind {
                ProviderKind::Google => "SEARCHHITS_GOOGLE",
                ProviderKind::Bing => "SEARCHHITS_BING",
            };
            if let Some(val) = var(&format!("{}_API_KEY", prefix)) {
                provider.api_key = Some(val);
            }
            if let Some(val) = var(&format!("{}_BASE_URL", prefix)) {
                provider.base_url = Some(val);
            }
            if provider.kind == ProviderKind::Google {
                if let Some(val) = var("SEARCHHITS_GOOGLE_CX") {
                    provider.cx = Some(val);
                }
            }
        }
    }

    /// Get all enabled providers, in declaration order
    pub fn enabled_providers(&self) -> Vec<&ProviderConfig> {
        self.providers.iter().filter(|p| !p.disabled).collect()
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,
    /// Longest accepted search string, in characters
    pub max_query_length: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            max_query_length: crate::MAX_QUERY_LENGTH,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            proxy: None,
        }
    }
}

/// Fan-out settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Provider calls in flight at once; 1 runs them one after another
    pub max_concurrency: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            max_concurrency: crate::aggregate::DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// Supported provider implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Bing,
}

/// Individual provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (unique, case-insensitive)
    pub name: String,
    /// Implementation to use
    pub kind: ProviderKind,
    /// Whether provider is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Override for the API base address
    #[serde(default)]
    pub base_url: Option<String>,
    /// API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Google programmable search engine id
    #[serde(default)]
    pub cx: Option<String>,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>, kind: ProviderKind) -> Self {
        Self {
            name: name.into(),
            kind,
            disabled: false,
            base_url: None,
            api_key: None,
            cx: None,
        }
    }
}

/// Default provider configurations
fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new("google", ProviderKind::Google),
        ProviderConfig::new("bing", ProviderKind::Bing),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.max_query_length, 75);
        assert_eq!(
            settings.aggregation.max_concurrency,
            crate::aggregate::DEFAULT_MAX_CONCURRENCY
        );
        let names: Vec<_> = settings.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["google", "bing"]);
    }

    #[test]
    fn test_enabled_providers_skip_disabled() {
        let mut settings = Settings::default();
        settings.providers[0].disabled = true;
        let enabled = settings.enabled_providers();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].kind, ProviderKind::Bing);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
server:
  port: 9000
aggregation:
  max_concurrency: 1
providers:
  - name: bing
    kind: bing
    api_key: secret
  - name: google
    kind: google
    disabled: true
"#;
        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.aggregation.max_concurrency, 1);
        assert_eq!(settings.providers[0].api_key.as_deref(), Some("secret"));
        assert_eq!(settings.enabled_providers().len(), 1);
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("SEARCHHITS_PORT", "9999"),
            ("SEARCHHITS_GOOGLE_API_KEY", "g-key"),
            ("SEARCHHITS_GOOGLE_CX", "g-cx"),
            ("SEARCHHITS_BING_API_KEY", "b-key"),
            ("SEARCHHITS_BING_BASE_URL", "http://localhost:1234"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.server.port, 9999);
        let google = &settings.providers[0];
        assert_eq!(google.api_key.as_deref(), Some("g-key"));
        assert_eq!(google.cx.as_deref(), Some("g-cx"));
        let bing = &settings.providers[1];
        assert_eq!(bing.api_key.as_deref(), Some("b-key"));
        assert_eq!(bing.base_url.as_deref(), Some("http://localhost:1234"));
        assert!(bing.cx.is_none());
    }
}
