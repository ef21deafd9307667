//! Outbound email delivery implementations of the core `Notifier` trait.

mod noop;
mod resend;

pub use noop::NoopMailer;
pub use resend::{ResendConfig, ResendMailer};
