use std::sync::Arc;

use shaker_application::{ScreenState, SearchScreen};
use shaker_core::drink::DrinkGateway;

use super::print_summary;

pub async fn run(gateway: Arc<dyn DrinkGateway>, term: &str) {
    let screen = SearchScreen::new(gateway);

    match screen.search(term).await {
        ScreenState::Loaded(drinks) => {
            let label = if drinks.len() == 1 { "result" } else { "results" };
            println!("{} {label} for \"{}\":", drinks.len(), term.trim());
            for drink in &drinks {
                print_summary(drink);
            }
        }
        ScreenState::Empty => println!("No results for \"{}\".", term.trim()),
        ScreenState::Error(message) => println!("{message}"),
        ScreenState::Loading => {}
    }
}
