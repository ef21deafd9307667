//! Contact message entity created by the submission workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message submitted through the public contact form
///
/// The id is assigned by the persistence collaborator on save; `created_at`
/// is always set server-side and never trusted from caller input. Messages
/// are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Identifier assigned on persist; `None` before the message is saved
    pub id: Option<Uuid>,

    /// Sender's display name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Message body
    pub message: String,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Creates a new unsaved message with a server-assigned timestamp
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
