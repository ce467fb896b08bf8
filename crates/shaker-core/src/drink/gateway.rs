//! Drink gateway trait.
//!
//! Defines the interface for the three read operations against the external
//! recipe API, decoupling screen logic from the HTTP client.

use super::model::{DrinkDetail, DrinkSummary};
use crate::error::Result;

/// An abstract gateway over the external drink recipe API.
///
/// All operations are pure reads. "No result" is a normal outcome, not an
/// error: implementations normalize an absent or empty record list to
/// `None` / an empty list so that callers never need to distinguish the two.
#[async_trait::async_trait]
pub trait DrinkGateway: Send + Sync {
    /// Looks up a single drink by its external identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DrinkDetail))`: The matching record
    /// - `Ok(None)`: The API returned no record for this id
    /// - `Err(ShakerError)`: Network or decoding failure
    async fn lookup_by_id(&self, id: &str) -> Result<Option<DrinkDetail>>;

    /// Searches drinks by free-text name.
    ///
    /// A blank term (empty after trimming) is rejected locally: the call
    /// returns an empty list without performing any network request.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<DrinkSummary>)`: Matching drinks, possibly empty
    /// - `Err(ShakerError)`: Network or decoding failure
    async fn search_by_name(&self, term: &str) -> Result<Vec<DrinkSummary>>;

    /// Fetches `count` random drinks concurrently.
    ///
    /// Issues `count` independent calls to the single-random-result endpoint
    /// and waits for all of them to settle (join-all barrier) before
    /// returning. Individual calls that fail or yield no record are dropped
    /// silently from the output; output order follows issue order. The batch
    /// as a whole never fails, so the return type carries no error.
    ///
    /// The output may contain duplicates; callers that need a unique list
    /// apply [`dedup_by_id`](super::dedup::dedup_by_id).
    async fn fetch_random_batch(&self, count: usize) -> Vec<DrinkSummary>;
}
