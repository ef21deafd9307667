//! Request and response data transfer objects.

pub mod auth_dto;
pub mod contact_dto;

pub use folio_core::errors::ErrorResponse;
