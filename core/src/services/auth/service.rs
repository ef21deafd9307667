//! Authentication service implementing the login flow.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_SECS;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// A fixed, structurally valid bcrypt hash used to equalize the work done
/// for unknown usernames. The matching password is never accepted because
/// the lookup has already failed.
const DUMMY_HASH: &str = "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The signed access token
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Service handling credential checks and token issuance
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticates a user and issues an access token
    ///
    /// The returned error is the same `Unauthorized` whether the username
    /// is unknown or the password is wrong; the distinction exists only in
    /// logs. Credential comparison goes through `bcrypt::verify`, which is
    /// constant-time in the supplied password.
    ///
    /// # Arguments
    ///
    /// * `username` - The login name
    /// * `password` - The supplied plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - Credentials matched; token issued
    /// * `Err(DomainError::Unauthorized)` - Unknown user or wrong password
    /// * `Err(DomainError::Storage)` - The lookup itself failed
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        match self.user_repository.find_by_username(username).await? {
            Some(user) => {
                let matches = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
                if !matches {
                    warn!(username, "login rejected: wrong password");
                    return Err(DomainError::Unauthorized);
                }

                let token = self.token_service.issue(&user.username, user.role)?;
                info!(username, role = user.role.as_str(), "login succeeded");
                Ok(LoginOutcome {
                    token,
                    expires_in: ACCESS_TOKEN_EXPIRY_SECS,
                })
            }
            None => {
                // Burn the same bcrypt work as the known-user path so the
                // response-time shape does not reveal which usernames exist.
                let _ = bcrypt::verify(password, DUMMY_HASH);
                warn!(username, "login rejected: unknown username");
                Err(DomainError::Unauthorized)
            }
        }
    }
}
