//! Unified path management for shaker configuration and data files.
//!
//! Resolution goes through the `dirs` crate so the same code yields the
//! right locations on Linux, macOS, and Windows.

use std::path::PathBuf;

use shaker_core::ShakerError;
use shaker_core::error::Result;

/// Unified path management for shaker.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/shaker/            # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/shaker/       # Data directory
/// └── favorites.json           # Persisted favorites (JsonFileStorage)
/// ```
pub struct ShakerPaths;

impl ShakerPaths {
    /// Returns the shaker configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/shaker/`)
    /// - `Err(ShakerError::Config)`: Could not determine the platform config dir
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shaker"))
            .ok_or_else(|| ShakerError::config("cannot determine config directory"))
    }

    /// Returns the path of the application configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the shaker data directory, used for persisted key-value data.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/shaker/`)
    /// - `Err(ShakerError::Config)`: Could not determine the platform data dir
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("shaker"))
            .ok_or_else(|| ShakerError::config("cannot determine data directory"))
    }
}
