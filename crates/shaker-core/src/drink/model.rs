//! Drink domain models.
//!
//! Represents cocktail records fetched from the external recipe API. Records
//! are identified by an opaque string id assigned by the API and are never
//! persisted beyond the in-memory list of the screen that fetched them.

use serde::{Deserialize, Serialize};

/// Number of numbered ingredient/measure slots on a detail record.
pub const INGREDIENT_SLOTS: usize = 15;

/// A drink as it appears in list views (home, search, favorites).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DrinkSummary {
    /// Opaque external identifier, unique per drink
    pub id: String,
    /// Display name of the drink
    pub name: String,
    /// URL of the thumbnail image
    pub thumbnail_url: String,
    /// Category label (e.g. "Cocktail", "Shot")
    pub category: String,
}

/// One entry of a drink's derived ingredient list.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name, trimmed, never empty
    pub name: String,
    /// Measure for this ingredient, trimmed; `None` when the slot has no measure
    pub measure: Option<String>,
}

/// A fully resolved drink record as shown on the detail screen.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DrinkDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    /// Alcoholic classification label (e.g. "Alcoholic", "Non alcoholic")
    pub alcoholic: String,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Recommended glass type
    pub glass: String,
    /// Ordered ingredient list derived from the record's numbered slots
    pub ingredients: Vec<Ingredient>,
}

impl DrinkDetail {
    /// Returns the list-view projection of this record.
    pub fn summary(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            category: self.category.clone(),
        }
    }
}

/// Derives the ordered ingredient list from a record's numbered slots.
///
/// The external API carries up to [`INGREDIENT_SLOTS`] independently-indexed
/// ingredient/measure pairs on a flat record. A slot contributes an entry iff
/// its ingredient value is non-empty after trimming whitespace; slots are
/// visited in ascending index order and that order is preserved in the
/// output. Measures are trimmed, with an empty or missing measure mapping to
/// `None`.
///
/// # Arguments
///
/// * `slots` - Ingredient/measure pairs in ascending slot-index order
pub fn extract_ingredients(slots: &[(Option<String>, Option<String>)]) -> Vec<Ingredient> {
    slots
        .iter()
        .filter_map(|(ingredient, measure)| {
            let name = ingredient.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            let measure = measure
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            Some(Ingredient {
                name: name.to_string(),
                measure,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(ingredient: &str, measure: &str) -> (Option<String>, Option<String>) {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        (opt(ingredient), opt(measure))
    }

    #[test]
    fn test_extract_skips_blank_slots_and_preserves_order() {
        let slots = vec![slot("Gin", "50ml"), slot("", ""), slot("Lime", "25ml")];

        let ingredients = extract_ingredients(&slots);

        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Gin");
        assert_eq!(ingredients[0].measure.as_deref(), Some("50ml"));
        assert_eq!(ingredients[1].name, "Lime");
        assert_eq!(ingredients[1].measure.as_deref(), Some("25ml"));
    }

    #[test]
    fn test_extract_skips_whitespace_only_ingredients() {
        let slots = vec![slot("   ", "30ml"), slot("Tequila", "")];

        let ingredients = extract_ingredients(&slots);

        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Tequila");
        assert_eq!(ingredients[0].measure, None);
    }

    #[test]
    fn test_extract_trims_names_and_measures() {
        let slots = vec![slot(" Sugar ", " 1 tsp ")];

        let ingredients = extract_ingredients(&slots);

        assert_eq!(ingredients[0].name, "Sugar");
        assert_eq!(ingredients[0].measure.as_deref(), Some("1 tsp"));
    }

    #[test]
    fn test_extract_empty_slots() {
        let slots: Vec<(Option<String>, Option<String>)> = vec![];
        assert!(extract_ingredients(&slots).is_empty());
    }

    #[test]
    fn test_detail_summary_projection() {
        let detail = DrinkDetail {
            id: "11007".to_string(),
            name: "Margarita".to_string(),
            thumbnail_url: "https://example.com/margarita.jpg".to_string(),
            category: "Ordinary Drink".to_string(),
            alcoholic: "Alcoholic".to_string(),
            instructions: "Shake with ice.".to_string(),
            glass: "Cocktail glass".to_string(),
            ingredients: vec![],
        };

        let summary = detail.summary();

        assert_eq!(summary.id, "11007");
        assert_eq!(summary.name, "Margarita");
        assert_eq!(summary.category, "Ordinary Drink");
    }
}
