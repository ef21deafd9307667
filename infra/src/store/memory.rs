//! In-memory repository implementations.
//!
//! These are the shipped persistence collaborators: a read-only user table
//! seeded at startup and an append-only, insertion-ordered message store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::entities::contact::ContactMessage;
use folio_core::domain::entities::user::User;
use folio_core::errors::DomainError;
use folio_core::repositories::{ContactRepository, UserRepository};

/// Read-only user store seeded with provisioned principals
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Create a store holding the given users, keyed by username
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(username).cloned())
    }
}

/// Append-only contact message store
///
/// `find_all` returns insertion order, so repeated reads with no
/// intervening writes are identical.
pub struct InMemoryContactRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryContactRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, mut message: ContactMessage) -> Result<ContactMessage, DomainError> {
        let mut messages = self.messages.write().await;
        message.id = Some(Uuid::new_v4());
        messages.push(message.clone());
        Ok(message)
    }

    async fn find_all(&self) -> Result<Vec<ContactMessage>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::domain::entities::user::UserRole;

    #[tokio::test]
    async fn user_store_is_read_only_lookup() {
        let repo = InMemoryUserRepository::with_users([User::new(
            "admin",
            "$2b$04$hash",
            UserRole::Admin,
        )]);
        assert!(repo.find_by_username("admin").await.unwrap().is_some());
        assert!(repo.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn contact_store_assigns_ids_and_preserves_order() {
        let repo = InMemoryContactRepository::new();
        let a = repo.save(ContactMessage::new("A", "a@x.com", "1")).await.unwrap();
        let b = repo.save(ContactMessage::new("B", "b@x.com", "2")).await.unwrap();
        assert!(a.id.is_some());
        assert_ne!(a.id, b.id);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(repo.find_all().await.unwrap(), all);
    }
}
