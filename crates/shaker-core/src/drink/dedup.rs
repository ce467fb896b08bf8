//! Stable deduplication of fetched drink lists.

use std::collections::HashSet;

use super::model::DrinkSummary;

/// Removes duplicate drinks by identifier, keeping the first occurrence.
///
/// The output order equals the input order restricted to first occurrences
/// (first-seen wins). Random-batch fetches issue independent calls against a
/// single-random-result endpoint, so the same drink can arrive more than
/// once within one batch.
pub fn dedup_by_id(drinks: Vec<DrinkSummary>) -> Vec<DrinkSummary> {
    let mut seen: HashSet<String> = HashSet::with_capacity(drinks.len());
    drinks
        .into_iter()
        .filter(|drink| seen.insert(drink.id.clone()))
        .collect()
}
