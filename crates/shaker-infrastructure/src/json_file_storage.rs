//! File-backed KeyValueStorage implementation.
//!
//! One `<key>.json` file per key under a base directory, written with fully
//! async I/O. This is the production counterpart of the in-memory storage
//! used under test.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use shaker_core::error::Result;
use shaker_core::storage::KeyValueStorage;

use crate::paths::ShakerPaths;

/// Key-value storage persisting each key as a JSON file on disk.
///
/// # Directory structure
///
/// ```text
/// base_dir/
/// └── favorites.json
/// ```
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `base_dir` (tests pass a temp dir).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a storage rooted at the platform data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(ShakerPaths::data_dir()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_dir).await?;
        let path = self.path_for(key);
        debug!(path = %path.display(), "writing key-value entry");
        tokio::fs::write(&path, value).await?;
        Ok(())
    }
}
