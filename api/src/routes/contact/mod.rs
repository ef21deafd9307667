//! Contact routes.

pub mod list;
pub mod submit;
