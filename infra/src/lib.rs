//! # Infrastructure Layer
//!
//! Concrete collaborators behind the core's repository and notifier traits:
//!
//! - **Store**: in-memory repositories (the persistence collaborator; a
//!   database-backed implementation would slot in behind the same traits)
//! - **Mail**: outbound email delivery through the Resend HTTP API, plus a
//!   no-op dispatcher for environments without mail credentials

pub mod mail;
pub mod store;
