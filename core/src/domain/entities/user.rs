//! User entity representing an authenticated principal of the Folio backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user, carried as the token's role claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Full access to protected management routes
    #[serde(rename = "ADMIN")]
    Admin,
    /// Authenticated but without management permissions
    #[serde(rename = "VIEWER")]
    Viewer,
}

impl UserRole {
    /// Returns the wire representation used in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Viewer => "VIEWER",
        }
    }

    /// Parses a role claim string back into a role
    ///
    /// Returns `None` for unknown role strings; a token carrying an
    /// unrecognized role never satisfies a role requirement.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(UserRole::Admin),
            "VIEWER" => Some(UserRole::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity looked up at login time
///
/// Users are provisioned outside this core and are read-only to it. The
/// credential is stored as a bcrypt hash; the plaintext never lives in the
/// entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name, identifies at most one user
    pub username: String,

    /// bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role assigned to the user
    pub role: UserRole,
}

impl User {
    /// Creates a new User with a freshly assigned id
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_form() {
        assert_eq!(UserRole::parse(UserRole::Admin.as_str()), Some(UserRole::Admin));
        assert_eq!(UserRole::parse(UserRole::Viewer.as_str()), Some(UserRole::Viewer));
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert_eq!(UserRole::parse("SUPERUSER"), None);
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn new_user_gets_unique_id() {
        let a = User::new("alice", "$2b$04$hash", UserRole::Admin);
        let b = User::new("alice", "$2b$04$hash", UserRole::Admin);
        assert_ne!(a.id, b.id);
    }
}
