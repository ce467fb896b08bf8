use std::sync::Arc;

use anyhow::Result;

use shaker_application::{FavoritesScreen, ScreenState};
use shaker_core::drink::DrinkGateway;
use shaker_core::favorites::FavoritesStore;

use super::print_summary;

pub async fn list(gateway: Arc<dyn DrinkGateway>, favorites: Arc<FavoritesStore>) {
    let screen = FavoritesScreen::new(gateway, favorites);

    match screen.load().await {
        ScreenState::Loaded(drinks) => {
            println!("Saved drinks:");
            for drink in &drinks {
                print_summary(drink);
            }
        }
        ScreenState::Empty => println!("No favorites yet. Toggle one with `shaker favorites toggle <id>`."),
        ScreenState::Error(message) => println!("{message}"),
        ScreenState::Loading => {}
    }
}

pub async fn toggle(favorites: Arc<FavoritesStore>, id: &str) -> Result<()> {
    if favorites.toggle(id).await? {
        println!("Added {id} to favorites.");
    } else {
        println!("Removed {id} from favorites.");
    }
    Ok(())
}

pub async fn count(favorites: Arc<FavoritesStore>) {
    println!("{}", favorites.count().await);
}
