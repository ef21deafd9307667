//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Service issuing and verifying self-contained HS256 access tokens
///
/// Verification is pure and stateless: a token is valid iff its signature
/// checks out against the process-wide secret and its expiry lies in the
/// future. No per-token server state exists, so instances scale
/// horizontally without shared sessions.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the startup configuration
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        // No clock skew allowance; the 1-hour lifetime is exact.
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for an authenticated principal
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated username (non-empty)
    /// * `role` - The single role carried by the token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, subject: &str, role: UserRole) -> Result<String, DomainError> {
        debug!(subject, role = role.as_str(), "issuing access token");
        let claims = Claims::new_access_token(subject, role.as_str());
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the signature and expiry hold
    /// * `Err(TokenError)` - Token is expired, forged, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidFormat,
                }
            })?;

        Ok(token_data.claims)
    }
}
