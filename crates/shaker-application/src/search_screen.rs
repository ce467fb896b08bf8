//! Search screen: free-text drink search.

use std::sync::Arc;

use tracing::warn;

use shaker_core::drink::{DrinkGateway, DrinkSummary};

use crate::screen::ScreenState;

/// Controller for the search screen.
pub struct SearchScreen {
    gateway: Arc<dyn DrinkGateway>,
}

impl SearchScreen {
    pub fn new(gateway: Arc<dyn DrinkGateway>) -> Self {
        Self { gateway }
    }

    /// Runs a search for the given term.
    ///
    /// A blank term is rejected locally with an inline message and performs
    /// no network call. A network failure is logged and collapses to
    /// `Empty`; the user never sees a distinguishable error state for it.
    pub async fn search(&self, term: &str) -> ScreenState<Vec<DrinkSummary>> {
        if term.trim().is_empty() {
            return ScreenState::Error("Search term cannot be empty".to_string());
        }

        match self.gateway.search_by_name(term).await {
            Ok(drinks) if drinks.is_empty() => ScreenState::Empty,
            Ok(drinks) => ScreenState::Loaded(drinks),
            Err(err) => {
                warn!(error = %err, "drink search failed, showing no results");
                ScreenState::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaker_core::ShakerError;
    use shaker_core::drink::DrinkDetail;
    use shaker_core::error::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGateway {
        results: Result<Vec<DrinkSummary>>,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DrinkGateway for StubGateway {
        async fn lookup_by_id(&self, _id: &str) -> Result<Option<DrinkDetail>> {
            Ok(None)
        }

        async fn search_by_name(&self, _term: &str) -> Result<Vec<DrinkSummary>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results.clone()
        }

        async fn fetch_random_batch(&self, _count: usize) -> Vec<DrinkSummary> {
            Vec::new()
        }
    }

    fn screen_with(results: Result<Vec<DrinkSummary>>) -> (Arc<StubGateway>, SearchScreen) {
        let gateway = Arc::new(StubGateway {
            results,
            calls: AtomicUsize::new(0),
        });
        (gateway.clone(), SearchScreen::new(gateway))
    }

    fn drink(id: &str) -> DrinkSummary {
        DrinkSummary {
            id: id.to_string(),
            name: format!("Drink {id}"),
            thumbnail_url: String::new(),
            category: "Cocktail".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_term_is_rejected_without_gateway_call() {
        let (gateway, screen) = screen_with(Ok(vec![drink("A")]));

        let state = screen.search("   ").await;

        assert!(matches!(state, ScreenState::Error(_)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_results_are_loaded() {
        let (_, screen) = screen_with(Ok(vec![drink("A"), drink("B")]));

        let drinks = screen.search("mar").await.loaded().unwrap();
        assert_eq!(drinks.len(), 2);
    }

    #[tokio::test]
    async fn test_no_results_is_empty_state() {
        let (_, screen) = screen_with(Ok(Vec::new()));

        assert!(screen.search("zzz").await.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_collapses_to_empty() {
        let (_, screen) = screen_with(Err(ShakerError::network("boom")));

        assert!(screen.search("mar").await.is_empty());
    }
}
