//! Outbound email delivery.
//!
//! - [`Mailer`] - Trait implemented by delivery backends
//! - [`SesMailer`] - Amazon SES (v2 API)
//! - [`LogMailer`] - Dry-run backend that only logs

pub mod log_mailer;
pub mod service;
pub mod ses_mailer;

pub use log_mailer::LogMailer;
pub use service::{MailError, Mailer};
pub use ses_mailer::SesMailer;

#[cfg(test)]
pub use service::MockMailer;
