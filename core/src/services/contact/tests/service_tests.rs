//! Tests for the submit-then-notify workflow

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::errors::DomainError;
use crate::repositories::contact::MockContactRepository;
use crate::services::contact::service::build_admin_notification;
use crate::services::contact::ContactService;
use crate::services::notification::{EmailNotification, NotificationError, Notifier};

/// Notifier that reports every attempt over a channel
struct RecordingNotifier {
    sender: mpsc::UnboundedSender<EmailNotification>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotificationError> {
        let _ = self.sender.send(notification.clone());
        Ok(())
    }
}

/// Notifier that fails every attempt, reporting it first
struct FailingNotifier {
    sender: mpsc::UnboundedSender<EmailNotification>,
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotificationError> {
        let _ = self.sender.send(notification.clone());
        Err(NotificationError::Transport {
            message: "connection refused".to_string(),
        })
    }
}

#[tokio::test]
async fn submit_persists_with_server_assigned_identity() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let service = ContactService::new(
        Arc::new(MockContactRepository::new()),
        Arc::new(RecordingNotifier { sender: tx }),
        "admin@folio.dev",
    );

    let saved = service.submit("A", "a@x.com", "hi").await.unwrap();
    assert!(saved.id.is_some());
    assert_eq!(saved.name, "A");
    assert_eq!(saved.email, "a@x.com");
    assert_eq!(saved.message, "hi");
}

#[tokio::test]
async fn submit_dispatches_a_notification_to_the_admin() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = ContactService::new(
        Arc::new(MockContactRepository::new()),
        Arc::new(RecordingNotifier { sender: tx }),
        "admin@folio.dev",
    );

    service.submit("Ada", "ada@x.com", "hello there").await.unwrap();

    let notification = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("notification task never ran")
        .unwrap();
    assert_eq!(notification.to, "admin@folio.dev");
    assert!(notification.subject.contains("Ada"));
    assert!(notification.html.contains("ada@x.com"));
    assert!(notification.html.contains("hello there"));
}

#[tokio::test]
async fn notification_failure_never_reaches_the_caller() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = ContactService::new(
        Arc::new(MockContactRepository::new()),
        Arc::new(FailingNotifier { sender: tx }),
        "admin@folio.dev",
    );

    let saved = service.submit("A", "a@x.com", "hi").await.unwrap();
    assert!(saved.id.is_some());

    // The attempt was made and failed, yet submit already returned Ok.
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("notification task never ran")
        .unwrap();
}

#[tokio::test]
async fn storage_failure_aborts_the_workflow_without_a_notification() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = ContactService::new(
        Arc::new(MockContactRepository::failing()),
        Arc::new(RecordingNotifier { sender: tx }),
        "admin@folio.dev",
    );

    let err = service.submit("A", "a@x.com", "hi").await.unwrap_err();
    assert!(matches!(err, DomainError::Storage { .. }));

    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn list_round_trips_submitted_fields_and_is_stable_between_writes() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let service = ContactService::new(
        Arc::new(MockContactRepository::new()),
        Arc::new(RecordingNotifier { sender: tx }),
        "admin@folio.dev",
    );

    service.submit("A", "a@x.com", "first").await.unwrap();
    service.submit("B", "b@x.com", "second").await.unwrap();

    let once = service.list().await.unwrap();
    let twice = service.list().await.unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
    assert_eq!(once[0].message, "first");
    assert_eq!(once[1].message, "second");
}

#[test]
fn notification_body_escapes_user_markup() {
    let message = crate::domain::entities::contact::ContactMessage::new(
        "<script>",
        "a@x.com",
        "line one\nline <two>",
    );
    let notification = build_admin_notification("admin@folio.dev", &message);
    assert!(notification.html.contains("&lt;script&gt;"));
    assert!(notification.html.contains("line one<br/>line &lt;two&gt;"));
    assert!(!notification.html.contains("<script>"));
}
