//! Home screen: a deduplicated batch of random drinks.

use std::sync::Arc;

use shaker_core::drink::{DrinkGateway, DrinkSummary, dedup_by_id};

use crate::screen::ScreenState;

/// Controller for the home screen.
///
/// Fetches a batch of random drinks through the gateway and deduplicates
/// them by id (first-seen wins); the random endpoint returns one drink per
/// call, so batches regularly contain repeats.
pub struct HomeScreen {
    gateway: Arc<dyn DrinkGateway>,
    batch_size: usize,
}

impl HomeScreen {
    pub fn new(gateway: Arc<dyn DrinkGateway>, batch_size: usize) -> Self {
        Self {
            gateway,
            batch_size,
        }
    }

    /// Loads a fresh batch of featured drinks.
    pub async fn load(&self) -> ScreenState<Vec<DrinkSummary>> {
        let drinks = dedup_by_id(self.gateway.fetch_random_batch(self.batch_size).await);
        if drinks.is_empty() {
            ScreenState::Empty
        } else {
            ScreenState::Loaded(drinks)
        }
    }
}
