//! Favorites store.
//!
//! A process-wide, persisted set of drink identifiers, read and written by
//! every screen through an injected [`KeyValueStorage`] port.

use std::sync::Arc;

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Storage key holding the JSON-encoded array of favorite drink ids.
pub const FAVORITES_KEY: &str = "favorites";

/// A persisted set of favorite drink identifiers.
///
/// Membership is order-irrelevant, but the persisted encoding is an ordered
/// JSON array: ids are appended on add and filtered out on remove, so
/// insertion order survives round trips. An absent or unparseable stored
/// value is treated as an empty set (fail open, not an error).
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl FavoritesStore {
    /// Creates a store over the given persistence port.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Returns whether `id` is currently a favorite. No side effects.
    pub async fn is_favorite(&self, id: &str) -> bool {
        self.read_ids().await.iter().any(|fav| fav == id)
    }

    /// Toggles membership of `id` and returns the new state.
    ///
    /// Appends `id` if absent (returns `true`), removes it if present
    /// (returns `false`). The full updated set is written back in a single
    /// read-modify-write; there is no concurrent-writer protocol, so two
    /// racing togglers can clobber each other's write. This mirrors the
    /// behavior of the source application and is intentionally not hardened.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let mut ids = self.read_ids().await;
        let added = if ids.iter().any(|fav| fav == id) {
            ids.retain(|fav| fav != id);
            false
        } else {
            ids.push(id.to_string());
            true
        };
        let encoded = serde_json::to_string(&ids)?;
        self.storage.write(FAVORITES_KEY, &encoded).await?;
        Ok(added)
    }

    /// Returns the number of stored favorites.
    pub async fn count(&self) -> usize {
        self.read_ids().await.len()
    }

    /// Returns all favorite ids in persisted (insertion) order.
    pub async fn ids(&self) -> Vec<String> {
        self.read_ids().await
    }

    async fn read_ids(&self) -> Vec<String> {
        match self.storage.read(FAVORITES_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }
}
