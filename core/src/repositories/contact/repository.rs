//! Contact repository trait defining the persistence boundary of the
//! submission workflow.

use async_trait::async_trait;

use crate::domain::entities::contact::ContactMessage;
use crate::errors::DomainError;

/// Repository trait for contact message persistence
///
/// `save` is the durability boundary of the submission workflow: once it
/// returns `Ok`, the message is committed and final.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a message and assign its identity
    ///
    /// # Arguments
    /// * `message` - The unsaved message (id must be `None`)
    ///
    /// # Returns
    /// * `Ok(ContactMessage)` - The saved message with its assigned id
    /// * `Err(DomainError)` - Storage failure; nothing was kept
    async fn save(&self, message: ContactMessage) -> Result<ContactMessage, DomainError>;

    /// List all persisted messages in insertion order
    async fn find_all(&self) -> Result<Vec<ContactMessage>, DomainError>;
}
