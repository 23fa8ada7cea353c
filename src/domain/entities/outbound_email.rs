//! Plain-text email built from a submission.

use super::{RoutingEntry, Submission};

/// Subject used when none is configured.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Submission";

/// An email ready to be handed to a [`crate::infrastructure::mail::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub source: String,
    pub destination: String,
    pub subject: String,
    pub text_body: String,
}

impl OutboundEmail {
    /// Composes the notification for `route` carrying the submission fields.
    ///
    /// The telephone line is emitted only when the form supplied one.
    pub fn compose(route: &RoutingEntry, submission: &Submission, subject: &str) -> Self {
        let mut text_body = format!("Name: {}\nEmail: {}\n", submission.name, submission.email);
        if let Some(telephone) = &submission.telephone {
            text_body.push_str(&format!("Telephone: {telephone}\n"));
        }
        text_body.push_str(&format!("Message: {}", submission.message));

        Self {
            source: route.sender.clone(),
            destination: route.recipient.clone(),
            subject: subject.to_string(),
            text_body,
        }
    }
}
