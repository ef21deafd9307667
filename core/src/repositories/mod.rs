//! Repository interfaces for persistence collaborators.
//!
//! Persistence itself is an external concern; this core only depends on the
//! contracts defined here. Mock implementations live next to each trait for
//! use in unit and integration tests.

pub mod contact;
pub mod user;

pub use contact::ContactRepository;
pub use user::UserRepository;
