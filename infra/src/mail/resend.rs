//! Resend email delivery implementation.
//!
//! Sends a single HTTP POST per notification to the Resend `/emails`
//! endpoint. The contract is deliberately best-effort: one attempt with a
//! bounded timeout, no retry, and errors that go no further than the
//! spawned delivery task that logs them.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use folio_core::services::notification::{EmailNotification, NotificationError, Notifier};

/// Default Resend API base URL
const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// Default outbound request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resend delivery configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key sent as a bearer credential
    pub api_key: String,
    /// Sender address (must belong to a verified domain)
    pub from_address: String,
    /// API base URL, overridable for testing
    pub api_base_url: String,
    /// Timeout for the delivery request in seconds
    pub request_timeout_secs: u64,
}

impl ResendConfig {
    /// Create configuration from environment variables
    ///
    /// `RESEND_API_KEY` and `MAIL_FROM` are required; `RESEND_API_BASE_URL`
    /// and `MAIL_TIMEOUT_SECS` fall back to defaults.
    pub fn from_env() -> Result<Self, NotificationError> {
        let api_key = std::env::var("RESEND_API_KEY").map_err(|_| NotificationError::Config {
            message: "RESEND_API_KEY not set".to_string(),
        })?;
        let from_address = std::env::var("MAIL_FROM").map_err(|_| NotificationError::Config {
            message: "MAIL_FROM not set".to_string(),
        })?;

        Ok(Self {
            api_key,
            from_address,
            api_base_url: std::env::var("RESEND_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// JSON payload for the Resend `/emails` endpoint
#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Email dispatcher backed by the Resend HTTP API
pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendMailer {
    /// Create a new mailer with a bounded-timeout HTTP client
    pub fn new(config: ResendConfig) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| NotificationError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        info!(from = %config.from_address, "Resend mailer initialized");
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, NotificationError> {
        Self::new(ResendConfig::from_env()?)
    }
}

#[async_trait]
impl Notifier for ResendMailer {
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotificationError> {
        let payload = EmailPayload {
            from: &self.config.from_address,
            to: &notification.to,
            subject: &notification.subject,
            html: &notification.html,
        };

        debug!(to = %notification.to, subject = %notification.subject, "dispatching email");

        let response = self
            .client
            .post(format!("{}/emails", self.config.api_base_url))
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        // Resend answers 200 on success; 201 is accepted for compatible
        // delivery endpoints.
        if status == 200 || status == 201 {
            Ok(())
        } else {
            Err(NotificationError::Rejected { status })
        }
    }
}
