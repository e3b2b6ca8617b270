//! Provider loader for initializing providers from configuration

use super::bing::Bing;
use super::google::Google;
use super::http::HttpProvider;
use super::registry::ProviderRegistry;
use super::traits::SearchProvider;
use crate::config::{ProviderConfig, ProviderKind, Settings};
use crate::network::HttpClient;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Build the registry from settings, in declaration order.
    ///
    /// A misconfigured provider fails the whole load rather than being left
    /// out of the registry.
    pub fn load(settings: &Settings, client: HttpClient) -> Result<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for config in settings.providers.iter().filter(|p| p.disabled) {
            info!("Skipping disabled provider: {}", config.name);
        }

        for config in settings.enabled_providers() {
            let provider = Self::create_provider(config, client.clone())
                .with_context(|| format!("failed to load provider {}", config.name))?;
            registry.register(provider)?;
            info!("Loaded provider: {} ({:?})", config.name, config.kind);
        }

        if registry.is_empty() {
            anyhow::bail!("no search providers are enabled");
        }

        info!("Loaded {} providers", registry.len());
        Ok(registry)
    }

    /// Create a provider instance from its configuration
    fn create_provider(
        config: &ProviderConfig,
        client: HttpClient,
    ) -> Result<Arc<dyn SearchProvider>> {
        let api_key = required(&config.api_key, "api_key")?;
        if let Some(ref base_url) = config.base_url {
            url::Url::parse(base_url)
                .with_context(|| format!("invalid base_url {:?}", base_url))?;
        }

        let provider: Arc<dyn SearchProvider> = match config.kind {
            ProviderKind::Google => {
                let cx = required(&config.cx, "cx")?;
                let mut google = Google::new(api_key, cx).with_name(&config.name);
                if let Some(ref url) = config.base_url {
                    google = google.with_base_url(url);
                }
                Arc::new(HttpProvider::new(google, client))
            }
            ProviderKind::Bing => {
                let mut bing = Bing::new(api_key).with_name(&config.name);
                if let Some(ref url) = config.base_url {
                    bing = bing.with_base_url(url);
                }
                Arc::new(HttpProvider::new(bing, client))
            }
        };

        Ok(provider)
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("missing {}", field))
}
