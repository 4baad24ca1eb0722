//! Application configuration.
//!
//! One TOML file covers the whole storefront: cart storage, record
//! store client, and display currency. Missing sections fall back to
//! defaults, so an empty file is a valid configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use freshcart_commerce::money::Currency;
use freshcart_data::ApiConfig;
use freshcart_store::StoreConfig;

/// Top-level storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshcartConfig {
    /// Cart storage configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Record-store client configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Display currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl FreshcartConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// The configured display currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .with_context(|| format!("Unsupported currency in config: {}", self.currency))
    }
}

impl Default for FreshcartConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            api: ApiConfig::default(),
            currency: default_currency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FreshcartConfig = toml::from_str("").unwrap();
        assert_eq!(config.currency, "INR");
        assert_eq!(config.store.cart_key, "freshcart-cart");
        assert_eq!(config.api.max_retries, 1);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: FreshcartConfig = toml::from_str(
            r#"
currency = "USD"

[store]
data_dir = "/tmp/freshcart-test"

[api]
max_retries = 3
"#,
        )
        .unwrap();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.store.data_dir.to_str(), Some("/tmp/freshcart-test"));
        assert_eq!(config.api.max_retries, 3);
        // Untouched fields keep defaults.
        assert_eq!(config.store.cart_key, "freshcart-cart");
    }
}
