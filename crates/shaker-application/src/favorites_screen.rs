//! Favorites screen: resolve every saved id to a drink card.

use std::sync::Arc;

use futures::future;
use tracing::warn;

use shaker_core::drink::{DrinkGateway, DrinkSummary};
use shaker_core::favorites::FavoritesStore;

use crate::screen::ScreenState;

/// Controller for the favorites screen.
///
/// Reads the persisted id list and resolves each id with a concurrent
/// lookup behind a join-all barrier. Lookups that fail or come back empty
/// are dropped silently, mirroring the per-item tolerance of the random
/// batch; output order follows the persisted order.
pub struct FavoritesScreen {
    gateway: Arc<dyn DrinkGateway>,
    favorites: Arc<FavoritesStore>,
}

impl FavoritesScreen {
    pub fn new(gateway: Arc<dyn DrinkGateway>, favorites: Arc<FavoritesStore>) -> Self {
        Self { gateway, favorites }
    }

    /// Loads the saved drinks.
    pub async fn load(&self) -> ScreenState<Vec<DrinkSummary>> {
        let ids = self.favorites.ids().await;
        if ids.is_empty() {
            return ScreenState::Empty;
        }

        let lookups = ids.iter().map(|id| self.gateway.lookup_by_id(id));
        let settled = future::join_all(lookups).await;

        let drinks: Vec<DrinkSummary> = settled
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(Some(detail)) => Some(detail.summary()),
                Ok(None) => None,
                Err(err) => {
                    warn!(error = %err, "dropping unresolvable favorite");
                    None
                }
            })
            .collect();

        if drinks.is_empty() {
            ScreenState::Empty
        } else {
            ScreenState::Loaded(drinks)
        }
    }

    /// Number of saved favorites (shown in the screen header).
    pub async fn count(&self) -> usize {
        self.favorites.count().await
    }
}
