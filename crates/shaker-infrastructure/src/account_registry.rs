//! In-memory account registry.
//!
//! The source application stubs authentication behind a login/register
//! capability with no real backend; this registry is that collaborator.
//! Accounts live for the process lifetime only.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use shaker_core::auth::{AccountProvider, User};
use shaker_core::error::Result;

struct AccountRecord {
    user: User,
    password: String,
}

/// Process-lifetime account store keyed by normalized email.
#[derive(Default)]
pub struct InMemoryAccountRegistry {
    accounts: RwLock<HashMap<String, AccountRecord>>,
}

impl InMemoryAccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[async_trait::async_trait]
impl AccountProvider for InMemoryAccountRegistry {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let accounts = self.accounts.read().await;
        let found = accounts
            .get(&Self::normalize(email))
            .filter(|record| record.password == password)
            .map(|record| record.user.clone());
        Ok(found)
    }

    async fn register(&self, email: &str, password: &str, name: &str) -> Result<Option<User>> {
        let key = Self::normalize(email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Ok(None);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        };
        accounts.insert(
            key,
            AccountRecord {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(Some(user))
    }
}
