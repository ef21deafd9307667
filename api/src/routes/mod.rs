//! Route handlers and shared application state.

pub mod auth;
pub mod contact;

use folio_core::repositories::{ContactRepository, UserRepository};
use folio_core::services::auth::AuthService;
use folio_core::services::contact::ContactService;

/// Application state shared across handlers
///
/// Immutable after startup; the only cross-request state in the process.
pub struct AppState<U, C>
where
    U: UserRepository,
    C: ContactRepository,
{
    pub auth_service: AuthService<U>,
    pub contact_service: ContactService<C>,
}
