//! Dry-run mailer.

use super::service::{MailError, Mailer};
use crate::domain::entities::OutboundEmail;
use async_trait::async_trait;
use tracing::{debug, info};

/// A mailer that logs the email instead of delivering it.
///
/// Selected with `MAIL_DRY_RUN=true`, typically for local runs without AWS
/// credentials. The body is only logged at `DEBUG`.
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        debug!("Using LogMailer (delivery disabled)");
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        info!(
            source = %email.source,
            destination = %email.destination,
            subject = %email.subject,
            "Dry run: email not sent"
        );
        debug!(body = %email.text_body, "Dry run email body");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer_always_succeeds() {
        let email = OutboundEmail {
            source: "noreply@example.com".to_string(),
            destination: "owner@example.com".to_string(),
            subject: "Subject".to_string(),
            text_body: "Body".to_string(),
        };

        assert!(LogMailer::new().send(&email).await.is_ok());
    }
}
