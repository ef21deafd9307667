//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime in seconds (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "folio-backend";

/// Claims structure for the JWT payload
///
/// Tokens are stateless: validity is fully determined by the signature and
/// the `exp` claim at verification time. There is no server-side revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role assigned at issuance, exactly one per token
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated username
    /// * `role` - The role claim carried by the token
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring exactly `ACCESS_TOKEN_EXPIRY_SECS`
    /// after issuance
    pub fn new_access_token(subject: &str, role: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS);

        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
