//! Contact message repository contract and test double.

mod mock;
mod repository;

pub use mock::MockContactRepository;
pub use repository::ContactRepository;
