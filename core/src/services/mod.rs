//! Business services of the Folio core.

pub mod auth;
pub mod contact;
pub mod notification;
pub mod token;

pub use auth::AuthService;
pub use contact::ContactService;
pub use notification::{EmailNotification, Notifier};
pub use token::TokenService;
