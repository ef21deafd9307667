//! HTTP middleware.

pub mod access_gate;
pub mod cors;
