//! Key-value storage port.
//!
//! The favorites set is persisted through this interface so that the store
//! can be backed by a file on disk in the application and by an in-memory
//! map under test.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

/// An abstract key-value persistence port.
///
/// The persistence layer only supports a single serialized string value per
/// key; an absent key is reported as `None`, never as an error.
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: The stored value
    /// - `Ok(None)`: No value has been stored under this key
    /// - `Err(ShakerError)`: Error if the read fails
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`KeyValueStorage`] implementation.
///
/// Suitable for tests and ephemeral sessions; values live only for the
/// process lifetime.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| crate::ShakerError::storage(format!("storage lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| crate::ShakerError::storage(format!("storage lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let storage = MemoryStorage::new();

        storage.write("favorites", "[\"11007\"]").await.unwrap();

        assert_eq!(
            storage.read("favorites").await.unwrap().as_deref(),
            Some("[\"11007\"]")
        );
    }

    #[tokio::test]
    async fn test_write_replaces_previous_value() {
        let storage = MemoryStorage::new();

        storage.write("favorites", "[]").await.unwrap();
        storage.write("favorites", "[\"17222\"]").await.unwrap();

        assert_eq!(
            storage.read("favorites").await.unwrap().as_deref(),
            Some("[\"17222\"]")
        );
    }
}
