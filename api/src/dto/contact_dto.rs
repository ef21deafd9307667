use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use folio_core::domain::entities::contact::ContactMessage;

/// Body of POST /contact
///
/// There is deliberately no timestamp field; `created_at` is always
/// assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// A persisted contact message as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            // Persisted messages always carry an id; the nil fallback only
            // guards the type, it is unreachable after a successful save.
            id: message.id.unwrap_or_else(Uuid::nil),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: message.created_at,
        }
    }
}
