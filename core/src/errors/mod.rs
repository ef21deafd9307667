//! Domain-specific error types and error handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Bad or missing credential at login, or absent token at the gate.
    /// Deliberately carries no detail: the response must not distinguish an
    /// unknown user from a wrong password.
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid token, insufficient role
    #[error("Forbidden")]
    Forbidden,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Persistence layer failure; never retried by this core
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Unauthorized => "unauthorized",
            DomainError::Forbidden => "forbidden",
            DomainError::NotFound { .. } => "not_found",
            DomainError::Storage { .. } => "storage_error",
            DomainError::Config { .. } => "configuration_error",
            DomainError::Internal { .. } => "internal_error",
            DomainError::Token(TokenError::Expired) => "token_expired",
            DomainError::Token(_) => "invalid_token",
        }
    }
}

/// Unified error response body for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}
