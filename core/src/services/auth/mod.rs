//! Login flow over the user repository and token service.

mod service;

pub use service::{AuthService, LoginOutcome};
