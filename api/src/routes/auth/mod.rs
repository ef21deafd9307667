//! Authentication routes.

pub mod login;
