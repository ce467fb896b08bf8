//! Session and account domain: user model, account provider port, and the
//! in-memory session controller.

pub mod model;
pub mod provider;
pub mod session;

pub use model::User;
pub use provider::AccountProvider;
pub use session::SessionController;
