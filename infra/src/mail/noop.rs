//! No-op mail dispatcher for environments without delivery credentials.

use async_trait::async_trait;
use tracing::warn;

use folio_core::services::notification::{EmailNotification, NotificationError, Notifier};

/// Dispatcher that drops every notification after logging it
///
/// Used when mail is unconfigured so the contact workflow keeps its
/// fire-and-forget shape without an outbound dependency.
pub struct NoopMailer;

#[async_trait]
impl Notifier for NoopMailer {
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotificationError> {
        warn!(
            to = %notification.to,
            subject = %notification.subject,
            "mail delivery unconfigured; dropping notification"
        );
        Ok(())
    }
}
