//! Domain entities.

pub mod contact;
pub mod token;
pub mod user;
