//! Notification delivery contract.
//!
//! The concrete dispatcher lives in the infrastructure layer; this core
//! only depends on the trait. Delivery is best-effort by contract: callers
//! spawn the attempt off their own execution path and absorb every failure
//! at that boundary.

use async_trait::async_trait;
use thiserror::Error;

/// A single outbound email attempt
///
/// Ephemeral: built per submission and discarded once the attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotification {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Errors raised by a notification dispatcher
///
/// These never propagate past the spawned delivery task; they exist so the
/// task can log a meaningful outcome.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("delivery endpoint rejected the message with status {status}")]
    Rejected { status: u16 },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("notifier misconfigured: {message}")]
    Config { message: String },
}

/// Trait for outbound email delivery services
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Attempt delivery of a single notification
    ///
    /// Exactly one attempt is made; there is no retry policy.
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotificationError>;
}
