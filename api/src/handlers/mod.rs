//! Response construction helpers.

pub mod error;
