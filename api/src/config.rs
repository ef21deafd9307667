//! Startup configuration for the API binary.

use folio_core::domain::entities::user::{User, UserRole};
use folio_core::errors::DomainError;
use folio_core::services::token::TokenConfig;

/// Configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Token signing configuration; absence of the secret is fatal
    pub token: TokenConfig,
    /// Recipient of contact notifications
    pub admin_email: String,
}

impl ApiConfig {
    /// Load configuration from the environment
    ///
    /// A missing or empty `JWT_SECRET` is an error: the process cannot
    /// serve auth and must refuse to start rather than degrade per
    /// request.
    pub fn from_env() -> Result<Self, DomainError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| DomainError::Config {
                message: "SERVER_PORT must be a valid port number".to_string(),
            })?;

        Ok(Self {
            host,
            port,
            token: TokenConfig::from_env()?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".to_string()),
        })
    }
}

/// Builds the provisioned users from the environment
///
/// `ADMIN_PASSWORD_HASH` (a bcrypt hash) is preferred; `ADMIN_PASSWORD` is
/// accepted for development and hashed once at startup. With neither set,
/// the user table is empty and every login fails.
pub fn provisioned_users() -> Result<Vec<User>, DomainError> {
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

    let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
        Ok(hash) => hash,
        Err(_) => match std::env::var("ADMIN_PASSWORD") {
            Ok(password) => {
                bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Config {
                    message: format!("failed to hash ADMIN_PASSWORD: {e}"),
                })?
            }
            Err(_) => {
                log::warn!("no admin credential configured; logins will be rejected");
                return Ok(Vec::new());
            }
        },
    };

    Ok(vec![User::new(username, password_hash, UserRole::Admin)])
}
