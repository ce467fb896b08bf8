//! Application configuration model.
//!
//! Loaded from `~/.config/shaker/config.toml` by the infrastructure layer;
//! every field has a default so an absent file configures a working app.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default base URL of the public recipe API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Default number of concurrent calls per random batch (home screen).
pub const DEFAULT_RANDOM_BATCH_SIZE: usize = 12;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiSettings,
    pub storage: StorageSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the recipe API, without a trailing slash
    pub base_url: String,
    /// Number of random drinks fetched for the home screen
    pub random_batch_size: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            random_batch_size: DEFAULT_RANDOM_BATCH_SIZE,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding persisted key-value data; platform data dir if unset
    pub data_dir: Option<PathBuf>,
}
