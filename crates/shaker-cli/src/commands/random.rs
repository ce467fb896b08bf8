use std::sync::Arc;

use shaker_application::{HomeScreen, ScreenState};
use shaker_core::drink::DrinkGateway;

use super::print_summary;

pub async fn run(gateway: Arc<dyn DrinkGateway>, count: usize) {
    let screen = HomeScreen::new(gateway, count);

    match screen.load().await {
        ScreenState::Loaded(drinks) => {
            println!("Featured drinks:");
            for drink in &drinks {
                print_summary(drink);
            }
        }
        ScreenState::Empty => println!("No drinks available right now."),
        ScreenState::Error(message) => println!("{message}"),
        ScreenState::Loading => {}
    }
}
