//! Login screen: login and registration submission.

use std::sync::Arc;

use tracing::warn;

use shaker_core::auth::SessionController;

/// Outcome of a login/register submission, rendered inline by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session is now authenticated
    Success,
    /// Email or password incorrect
    InvalidCredentials,
    /// Registration rejected: the email is already registered
    EmailTaken,
    /// A required field was blank; rejected before any provider call
    MissingField(&'static str),
    /// The provider failed; generic message, details are logged only
    Failed(String),
}

/// Controller for the login screen.
pub struct LoginScreen {
    session: Arc<SessionController>,
}

impl LoginScreen {
    pub fn new(session: Arc<SessionController>) -> Self {
        Self { session }
    }

    /// Submits the login form.
    pub async fn submit_login(&self, email: &str, password: &str) -> LoginOutcome {
        if email.trim().is_empty() {
            return LoginOutcome::MissingField("email");
        }
        if password.is_empty() {
            return LoginOutcome::MissingField("password");
        }

        match self.session.login(email, password).await {
            Ok(true) => LoginOutcome::Success,
            Ok(false) => LoginOutcome::InvalidCredentials,
            Err(err) => {
                warn!(error = %err, "login submission failed");
                LoginOutcome::Failed("Something went wrong, please try again".to_string())
            }
        }
    }

    /// Submits the registration form.
    pub async fn submit_register(&self, email: &str, password: &str, name: &str) -> LoginOutcome {
        if name.trim().is_empty() {
            return LoginOutcome::MissingField("name");
        }
        if email.trim().is_empty() {
            return LoginOutcome::MissingField("email");
        }
        if password.is_empty() {
            return LoginOutcome::MissingField("password");
        }

        match self.session.register(email, password, name).await {
            Ok(true) => LoginOutcome::Success,
            Ok(false) => LoginOutcome::EmailTaken,
            Err(err) => {
                warn!(error = %err, "registration submission failed");
                LoginOutcome::Failed("Something went wrong, please try again".to_string())
            }
        }
    }
}
