//! Cart storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Well-known storage key the cart persists under.
pub const DEFAULT_CART_KEY: &str = "freshcart-cart";

/// Configuration for the local cart store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory the key-value store writes under.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage key for the persisted cart.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".freshcart")
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cart_key: default_cart_key(),
        }
    }
}
