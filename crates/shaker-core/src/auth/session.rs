//! Session controller.
//!
//! Holds the current user's identity in memory for the lifetime of the
//! application process and exposes login/register/logout over an injected
//! [`AccountProvider`].

use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::User;
use super::provider::AccountProvider;
use crate::error::Result;

/// In-memory session state machine: `anonymous` or `authenticated(user)`.
///
/// `login` and `register` transition to `authenticated` on success and leave
/// the state untouched on failure (boolean result, no error); `logout`
/// returns to `anonymous` unconditionally.
pub struct SessionController {
    provider: Arc<dyn AccountProvider>,
    current: RwLock<Option<User>>,
}

impl SessionController {
    /// Creates a controller with no authenticated user.
    pub fn new(provider: Arc<dyn AccountProvider>) -> Self {
        Self {
            provider,
            current: RwLock::new(None),
        }
    }

    /// Attempts to log in with the given credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Credentials accepted, session is now authenticated
    /// - `Ok(false)`: Credentials rejected, session unchanged
    /// - `Err(ShakerError)`: The provider failed (transient)
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        match self.provider.authenticate(email, password).await? {
            Some(user) => {
                *self.current.write().await = Some(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Attempts to register a new account and logs in on success.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Account created, session is now authenticated
    /// - `Ok(false)`: Email already registered, session unchanged
    /// - `Err(ShakerError)`: The provider failed (transient)
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<bool> {
        match self.provider.register(email, password, name).await? {
            Some(user) => {
                *self.current.write().await = Some(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears the session unconditionally.
    pub async fn logout(&self) {
        *self.current.write().await = None;
    }

    /// Returns the currently authenticated user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Returns whether a user is currently authenticated.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShakerError;

    /// Provider with a single fixed account, plus a failure mode.
    struct FixedProvider {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl AccountProvider for FixedProvider {
        async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
            if self.fail {
                return Err(ShakerError::network("provider unreachable"));
            }
            if email == "ana@example.com" && password == "secret" {
                Ok(Some(User {
                    id: "u-1".to_string(),
                    name: "Ana".to_string(),
                    email: email.to_string(),
                }))
            } else {
                Ok(None)
            }
        }

        async fn register(&self, email: &str, _password: &str, name: &str) -> Result<Option<User>> {
            if self.fail {
                return Err(ShakerError::network("provider unreachable"));
            }
            if email == "ana@example.com" {
                Ok(None)
            } else {
                Ok(Some(User {
                    id: "u-2".to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                }))
            }
        }
    }

    fn controller() -> SessionController {
        SessionController::new(Arc::new(FixedProvider { fail: false }))
    }

    #[tokio::test]
    async fn test_login_success_sets_session() {
        let session = controller();

        assert!(session.login("ana@example.com", "secret").await.unwrap());
        assert!(session.is_authenticated().await);
        assert_eq!(session.current_user().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_login_wrong_credentials_stays_anonymous() {
        let session = controller();

        assert!(!session.login("ana@example.com", "nope").await.unwrap());
        assert!(!session.is_authenticated().await);
        assert_eq!(session.current_user().await, None);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_stays_anonymous() {
        let session = controller();

        let ok = session
            .register("ana@example.com", "pw", "Other Ana")
            .await
            .unwrap();

        assert!(!ok);
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_register_success_sets_session() {
        let session = controller();

        assert!(session.register("bo@example.com", "pw", "Bo").await.unwrap());
        assert_eq!(session.current_user().await.unwrap().email, "bo@example.com");
    }

    #[tokio::test]
    async fn test_logout_is_unconditional() {
        let session = controller();
        session.logout().await;
        assert!(!session.is_authenticated().await);

        session.login("ana@example.com", "secret").await.unwrap();
        session.logout().await;
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_and_session_unchanged() {
        let session = SessionController::new(Arc::new(FixedProvider { fail: true }));

        let err = session.login("ana@example.com", "secret").await.unwrap_err();
        assert!(err.is_network());
        assert!(!session.is_authenticated().await);
    }
}
