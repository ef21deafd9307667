//! Storage implementations of the core repository traits.

mod memory;

pub use memory::{InMemoryContactRepository, InMemoryUserRepository};
