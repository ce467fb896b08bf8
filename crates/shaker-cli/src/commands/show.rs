use std::sync::Arc;

use shaker_application::{DetailScreen, ScreenState};
use shaker_core::drink::DrinkGateway;
use shaker_core::favorites::FavoritesStore;

pub async fn run(gateway: Arc<dyn DrinkGateway>, favorites: Arc<FavoritesStore>, id: &str) {
    let screen = DetailScreen::new(gateway, favorites);

    match screen.load(id).await {
        ScreenState::Loaded(view) => {
            let detail = &view.detail;
            let marker = if view.is_favorite { "  ★ favorite" } else { "" };
            println!("{}{marker}", detail.name);
            println!("{} | {} | {}", detail.category, detail.alcoholic, detail.glass);
            println!();
            println!("Ingredients:");
            for ingredient in &detail.ingredients {
                match &ingredient.measure {
                    Some(measure) => println!("  {:<24}{measure}", ingredient.name),
                    None => println!("  {}", ingredient.name),
                }
            }
            println!();
            println!("{}", detail.instructions);
        }
        ScreenState::Empty => println!("Recipe not found."),
        ScreenState::Error(message) => println!("{message}"),
        ScreenState::Loading => {}
    }
}
