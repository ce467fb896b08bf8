//! Profile screen: current user and favorites count.

use std::sync::Arc;

use shaker_core::auth::{SessionController, User};
use shaker_core::favorites::FavoritesStore;

use crate::screen::ScreenState;

/// What the profile screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user: User,
    pub favorites_count: usize,
}

/// Controller for the profile screen.
pub struct ProfileScreen {
    session: Arc<SessionController>,
    favorites: Arc<FavoritesStore>,
}

impl ProfileScreen {
    pub fn new(session: Arc<SessionController>, favorites: Arc<FavoritesStore>) -> Self {
        Self { session, favorites }
    }

    /// Loads the profile; `Empty` while anonymous.
    pub async fn load(&self) -> ScreenState<ProfileView> {
        match self.session.current_user().await {
            Some(user) => ScreenState::Loaded(ProfileView {
                user,
                favorites_count: self.favorites.count().await,
            }),
            None => ScreenState::Empty,
        }
    }

    /// Logs the current user out unconditionally.
    pub async fn logout(&self) {
        self.session.logout().await;
    }
}
