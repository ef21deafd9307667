//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::repository::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    fail_lookups: bool,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_lookups: false,
        }
    }

    /// Create a mock repository whose lookups fail with a storage error
    pub fn failing() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_lookups: true,
        }
    }

    /// Insert a user, keyed by username
    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.username.clone(), user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        if self.fail_lookups {
            return Err(DomainError::Storage {
                message: "simulated lookup failure".to_string(),
            });
        }
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}
