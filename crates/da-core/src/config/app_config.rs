//! Application configuration domain model

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_ENDPOINT: &str = "mongodb://localhost:27017";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Device store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Device store configuration
///
/// Database and collection names are fixed by the store adapter; only the
/// endpoint is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Connection endpoint, e.g. `mongodb://db.example:27017`
    pub endpoint: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STORE_ENDPOINT.to_string(),
        }
    }
}
