//! User repository trait defining the interface for principal lookup.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for looking up users at login time
///
/// Users are provisioned outside this core, so the contract is read-only:
/// the login flow only ever needs a lookup by unique username.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique username
    ///
    /// # Arguments
    /// * `username` - The login name to look up
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
