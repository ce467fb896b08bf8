//! Drink domain: models, gateway port, and aggregation logic.

pub mod dedup;
pub mod gateway;
pub mod model;

pub use dedup::dedup_by_id;
pub use gateway::DrinkGateway;
pub use model::{DrinkDetail, DrinkSummary, INGREDIENT_SLOTS, Ingredient, extract_ingredients};
