//! Detail screen: one recipe plus its favorite state.

use std::sync::Arc;

use tracing::warn;

use shaker_core::drink::{DrinkDetail, DrinkGateway};
use shaker_core::error::Result;
use shaker_core::favorites::FavoritesStore;

use crate::screen::ScreenState;

/// What the detail screen renders: the record and its favorite membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkView {
    pub detail: DrinkDetail,
    pub is_favorite: bool,
}

/// Controller for the drink detail screen.
pub struct DetailScreen {
    gateway: Arc<dyn DrinkGateway>,
    favorites: Arc<FavoritesStore>,
}

impl DetailScreen {
    pub fn new(gateway: Arc<dyn DrinkGateway>, favorites: Arc<FavoritesStore>) -> Self {
        Self { gateway, favorites }
    }

    /// Loads one drink by id together with its favorite state.
    ///
    /// "Not found" and a network failure both collapse to `Empty` (the
    /// latter after logging); the screen shows the same "recipe not found"
    /// body for both.
    pub async fn load(&self, id: &str) -> ScreenState<DrinkView> {
        match self.gateway.lookup_by_id(id).await {
            Ok(Some(detail)) => {
                let is_favorite = self.favorites.is_favorite(id).await;
                ScreenState::Loaded(DrinkView {
                    detail,
                    is_favorite,
                })
            }
            Ok(None) => ScreenState::Empty,
            Err(err) => {
                warn!(error = %err, drink_id = id, "drink lookup failed");
                ScreenState::Empty
            }
        }
    }

    /// Toggles favorite membership for `id`; returns the new state.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.favorites.toggle(id).await
    }
}
