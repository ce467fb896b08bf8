//! User domain model.

use serde::{Deserialize, Serialize};

/// An authenticated user's identity.
///
/// Held only in memory for the lifetime of the application process; there is
/// no durable session persistence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier (UUID format), assigned at registration
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email address
    pub email: String,
}
