//! Mock implementation of ContactRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::contact::ContactMessage;
use crate::errors::DomainError;

use super::repository::ContactRepository;

/// Mock contact repository for testing
pub struct MockContactRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    fail_saves: bool,
}

impl MockContactRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            fail_saves: false,
        }
    }

    /// Create a mock repository whose saves fail with a storage error
    pub fn failing() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            fail_saves: true,
        }
    }

    /// Number of messages currently stored
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save(&self, mut message: ContactMessage) -> Result<ContactMessage, DomainError> {
        if self.fail_saves {
            return Err(DomainError::Storage {
                message: "simulated save failure".to_string(),
            });
        }
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

    #[tokio::test]
    async fn save_assigns_an_id_and_keeps_insertion_order() {
        let repo = MockContactRepository::new();
        let first = repo.save(ContactMessage::new("A", "a@x.com", "hi")).await.unwrap();
        let second = repo.save(ContactMessage::new("B", "b@x.com", "yo")).await.unwrap();

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A");
        assert_eq!(all[1].name, "B");
    }

    #[tokio::test]
    async fn failing_repository_keeps_nothing() {
        let repo = MockContactRepository::failing();
        let err = repo.save(ContactMessage::new("A", "a@x.com", "hi")).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
        assert_eq!(repo.len().await, 0);
    }
}
