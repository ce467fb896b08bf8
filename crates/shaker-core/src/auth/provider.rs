//! Account provider trait.
//!
//! Credential validation is delegated entirely to an external collaborator;
//! this trait is the port the session controller talks through.

use super::model::User;
use crate::error::Result;

/// An abstract provider of account registration and credential validation.
///
/// "Wrong credentials" and "email already registered" are normal outcomes
/// signaled via `None`, not errors; `Err` is reserved for transient failures
/// of the provider itself.
#[async_trait::async_trait]
pub trait AccountProvider: Send + Sync {
    /// Validates credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: Credentials are valid
    /// - `Ok(None)`: Unknown email or wrong password
    /// - `Err(ShakerError)`: The provider itself failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>>;

    /// Registers a new account.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: Account created
    /// - `Ok(None)`: The email is already registered
    /// - `Err(ShakerError)`: The provider itself failed
    async fn register(&self, email: &str, password: &str, name: &str) -> Result<Option<User>>;
}
