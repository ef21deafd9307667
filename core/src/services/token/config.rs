//! Configuration for the token service

use crate::errors::DomainError;

/// Configuration for the token service
///
/// The signing secret is loaded once at startup and never mutated
/// afterwards; a missing secret is a startup failure, never a per-request
/// one.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
}

impl TokenConfig {
    /// Create a configuration from an explicit secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Load the configuration from the `JWT_SECRET` environment variable
    ///
    /// # Returns
    ///
    /// * `Ok(TokenConfig)` - Secret present and non-empty
    /// * `Err(DomainError::Config)` - Secret absent; the process cannot
    ///   serve auth and must not start
    pub fn from_env() -> Result<Self, DomainError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| DomainError::Config {
            message: "JWT_SECRET not set".to_string(),
        })?;
        if jwt_secret.trim().is_empty() {
            return Err(DomainError::Config {
                message: "JWT_SECRET is empty".to_string(),
            });
        }
        Ok(Self { jwt_secret })
    }
}
