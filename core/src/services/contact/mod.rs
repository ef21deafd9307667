//! Contact submission workflow: persist, then notify best-effort.

mod service;

pub use service::ContactService;

#[cfg(test)]
mod tests;
