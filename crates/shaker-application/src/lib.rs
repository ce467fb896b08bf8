//! Screen controllers for Shaker.
//!
//! Each screen composes the drink gateway, the favorites store, and the
//! session controller into a per-screen loading/loaded/empty/error state.
//! Screens are pull-model: `load()` produces a fresh state and holds no
//! mutable per-screen storage, so a caller that navigates away simply drops
//! the future (no cancellation, matching the source application).

pub mod detail_screen;
pub mod favorites_screen;
pub mod home_screen;
pub mod login_screen;
pub mod profile_screen;
pub mod screen;
pub mod search_screen;

pub use detail_screen::{DetailScreen, DrinkView};
pub use favorites_screen::FavoritesScreen;
pub use home_screen::HomeScreen;
pub use login_screen::{LoginOutcome, LoginScreen};
pub use profile_screen::{ProfileScreen, ProfileView};
pub use screen::ScreenState;
pub use search_screen::SearchScreen;
