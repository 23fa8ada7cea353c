//! Mailer trait and error types.

use async_trait::async_trait;

use crate::domain::entities::OutboundEmail;

/// Errors raised while handing an email to the delivery service.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("Failed to send email: {0}")]
    Delivery(String),
}

/// Sends a composed [`OutboundEmail`].
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SesMailer`] - Amazon SES
/// - [`crate::infrastructure::mail::LogMailer`] - logs instead of sending
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a single email. No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] if the email is rejected or the service fails.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
