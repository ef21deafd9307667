//! Contact submission workflow implementation.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::contact::ContactMessage;
use crate::errors::DomainError;
use crate::repositories::ContactRepository;
use crate::services::notification::{EmailNotification, Notifier};

/// Service handling contact form submissions and the admin message list
///
/// `submit` is transactional around persistence only: the save is the
/// durability boundary, and the notification attempt that follows runs on
/// its own task, is never awaited by the caller, and can neither roll back
/// nor re-queue the committed message.
pub struct ContactService<C: ContactRepository> {
    contact_repository: Arc<C>,
    notifier: Arc<dyn Notifier>,
    admin_email: String,
}

impl<C: ContactRepository> ContactService<C> {
    /// Creates a new contact service
    ///
    /// # Arguments
    ///
    /// * `contact_repository` - Persistence collaborator for messages
    /// * `notifier` - Outbound delivery collaborator
    /// * `admin_email` - Recipient of new-message notifications
    pub fn new(
        contact_repository: Arc<C>,
        notifier: Arc<dyn Notifier>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            contact_repository,
            notifier,
            admin_email: admin_email.into(),
        }
    }

    /// Persists a submitted message and triggers a fire-and-forget
    /// notification
    ///
    /// # Returns
    ///
    /// * `Ok(ContactMessage)` - The committed record with its assigned id;
    ///   returned before the notification outcome is known
    /// * `Err(DomainError::Storage)` - Persistence failed; nothing was kept
    ///   and no notification is attempted
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, DomainError> {
        let unsaved = ContactMessage::new(name, email, message);
        let saved = self.contact_repository.save(unsaved).await?;
        info!(email, "contact message persisted");

        let notification = build_admin_notification(&self.admin_email, &saved);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            match notifier.send(&notification).await {
                Ok(()) => info!("contact notification delivered"),
                Err(err) => error!(%err, "contact notification delivery failed"),
            }
        });

        Ok(saved)
    }

    /// Lists all persisted messages in insertion order
    pub async fn list(&self) -> Result<Vec<ContactMessage>, DomainError> {
        self.contact_repository.find_all().await
    }
}

/// Builds the admin notification for a freshly persisted message
pub(crate) fn build_admin_notification(admin_email: &str, message: &ContactMessage) -> EmailNotification {
    let subject = format!("Portfolio: new contact message from {}", message.name);
    let html = format!(
        "<div style='font-family: sans-serif; padding: 20px;'>\
         <h1 style='font-size: 20px;'>New contact message</h1>\
         <p><strong>From:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <div style='margin-top: 20px; padding: 15px; border-left: 4px solid #888; font-style: italic;'>{}</div>\
         </div>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.message).replace('\n', "<br/>"),
    );

    EmailNotification {
        to: admin_email.to_string(),
        subject,
        html,
    }
}

/// Escapes user-supplied text before it lands in the notification body
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
