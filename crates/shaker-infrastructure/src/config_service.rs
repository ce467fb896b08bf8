//! Configuration loading.
//!
//! Reads `~/.config/shaker/config.toml` when present. An absent file, an
//! empty file, or an undeterminable config directory all yield the default
//! configuration; a file that exists but cannot be read or parsed is an
//! error.

use std::path::Path;

use shaker_core::config::Config;
use shaker_core::error::Result;

use crate::paths::ShakerPaths;

/// Loads the application configuration from the default config file path.
pub fn load_config() -> Result<Config> {
    match ShakerPaths::config_file() {
        Ok(path) => load_config_from(&path),
        // No platform config dir; run on defaults.
        Err(_) => Ok(Config::default()),
    }
}

/// Loads configuration from an explicit path (tests).
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config = toml::from_str(&content)?;
    Ok(config)
}
