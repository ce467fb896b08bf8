pub mod favorites;
pub mod random;
pub mod search;
pub mod show;

use shaker_core::drink::DrinkSummary;

/// Prints one drink card line.
pub fn print_summary(drink: &DrinkSummary) {
    println!("  {}  {} ({})", drink.id, drink.name, drink.category);
}
