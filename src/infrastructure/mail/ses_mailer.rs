//! Amazon SES implementation of [`Mailer`].

use async_trait::async_trait;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use tracing::info;

use super::service::{MailError, Mailer};
use crate::domain::entities::OutboundEmail;

const CHARSET: &str = "UTF-8";

/// Sends plain-text email through the SES v2 `SendEmail` API.
#[derive(Clone)]
pub struct SesMailer {
    client: aws_sdk_sesv2::Client,
}

impl SesMailer {
    pub fn new(client: aws_sdk_sesv2::Client) -> Self {
        Self { client }
    }

    fn content(data: &str) -> Result<Content, MailError> {
        Content::builder()
            .data(data)
            .charset(CHARSET)
            .build()
            .map_err(|e| MailError::Build(e.to_string()))
    }

    fn email_content(email: &OutboundEmail) -> Result<EmailContent, MailError> {
        let subject = Self::content(&email.subject)?;
        let text = Self::content(&email.text_body)?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        Ok(EmailContent::builder().simple(message).build())
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let destination = Destination::builder()
            .to_addresses(&email.destination)
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&email.source)
            .destination(destination)
            .content(Self::email_content(email)?)
            .send()
            .await
            .map_err(|e| MailError::Delivery(DisplayErrorContext(&e).to_string()))?;

        info!(
            message_id = output.message_id().unwrap_or("-"),
            "Email accepted by SES"
        );

        Ok(())
    }
}
