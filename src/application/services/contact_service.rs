//! Contact form processing service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::outbound_email::DEFAULT_SUBJECT;
use crate::domain::entities::{OutboundEmail, RoutingEntry, Submission};
use crate::domain::repositories::RoutingRepository;
use crate::error::AppError;
use crate::infrastructure::captcha::CaptchaVerifier;
use crate::infrastructure::mail::Mailer;

/// Relays a contact form submission to the site owner's mailbox.
///
/// The chain runs strictly in order and stops at the first failure:
///
/// 1. Look up the routing entry for the calling domain
/// 2. Parse the submission body
/// 3. Verify the CAPTCHA token
/// 4. Send one email from the entry's sender to its recipient
///
/// Nothing is retried.
pub struct ContactService {
    routing: Arc<dyn RoutingRepository>,
    captcha: Arc<dyn CaptchaVerifier>,
    mailer: Arc<dyn Mailer>,
    subject: String,
}

impl ContactService {
    /// Creates a service using the default email subject.
    pub fn new(
        routing: Arc<dyn RoutingRepository>,
        captcha: Arc<dyn CaptchaVerifier>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            routing,
            captcha,
            mailer,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    /// Overrides the subject line of outgoing emails.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Processes one submission from `domain` with the raw JSON `body`.
    ///
    /// Returns the routing entry the email was delivered through.
    ///
    /// # Errors
    ///
    /// - [`AppError::DomainNotFound`] if `domain` has no routing entry; the
    ///   CAPTCHA service and the mailer are not called
    /// - [`AppError::CaptchaFailed`] if the verifier rejects the token; no
    ///   email is sent
    /// - [`AppError::Internal`] for malformed bodies, verifier or mailer
    ///   failures, and routing table errors
    pub async fn submit(&self, domain: &str, body: &[u8]) -> Result<RoutingEntry, AppError> {
        let route = self
            .routing
            .find_by_host(domain)
            .await?
            .ok_or_else(|| AppError::domain_not_found(domain))?;

        let submission = Submission::from_json(body)?;

        self.verify_captcha(&submission).await?;

        let email = OutboundEmail::compose(&route, &submission, &self.subject);
        self.mailer.send(&email).await?;

        info!(domain, recipient = %route.recipient, "Contact form submission delivered");

        Ok(route)
    }

    async fn verify_captcha(&self, submission: &Submission) -> Result<(), AppError> {
        let verdict = self.captcha.verify(&submission.captcha_token).await?;

        if !verdict.success {
            warn!(
                error_codes = ?verdict.error_codes,
                hostname = ?verdict.hostname,
                "CAPTCHA rejected"
            );
            return Err(AppError::CaptchaFailed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRoutingRepository;
    use crate::infrastructure::captcha::{CaptchaError, CaptchaVerdict, MockCaptchaVerifier};
    use crate::infrastructure::mail::{MailError, MockMailer};

    const VALID_BODY: &[u8] = br#"{
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello",
        "recaptchaToken": "good-token"
    }"#;

    fn route() -> RoutingEntry {
        RoutingEntry::new("example.com", "owner@example.com", "noreply@example.com")
    }

    fn known_domain_repo() -> MockRoutingRepository {
        let mut repo = MockRoutingRepository::new();
        repo.expect_find_by_host()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| Ok(Some(route())));
        repo
    }

    fn service(
        repo: MockRoutingRepository,
        captcha: MockCaptchaVerifier,
        mailer: MockMailer,
    ) -> ContactService {
        ContactService::new(Arc::new(repo), Arc::new(captcha), Arc::new(mailer))
    }

    #[tokio::test]
    async fn test_submit_success_sends_one_email() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha
            .expect_verify()
            .withf(|token| token == "good-token")
            .times(1)
            .returning(|_| Ok(CaptchaVerdict::passed()));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.source == "noreply@example.com"
                    && email.destination == "owner@example.com"
                    && email.subject == "New Contact Form Submission"
                    && email.text_body.contains("Name: Ada")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = service(known_domain_repo(), captcha, mailer);

        let result = service.submit("example.com", VALID_BODY).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().recipient, "owner@example.com");
    }

    #[tokio::test]
    async fn test_unknown_domain_skips_captcha_and_mail() {
        let mut repo = MockRoutingRepository::new();
        repo.expect_find_by_host().times(1).returning(|_| Ok(None));

        let mut captcha = MockCaptchaVerifier::new();
        captcha.expect_verify().times(0);
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let service = service(repo, captcha, mailer);

        let result = service.submit("unknown.com", VALID_BODY).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::DomainNotFound { domain } if domain == "unknown.com"
        ));
    }

    #[tokio::test]
    async fn test_routing_store_error_is_internal() {
        let mut repo = MockRoutingRepository::new();
        repo.expect_find_by_host()
            .times(1)
            .returning(|_| Err(AppError::internal("throttled")));

        let mut captcha = MockCaptchaVerifier::new();
        captcha.expect_verify().times(0);
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let service = service(repo, captcha, mailer);

        let err = service.submit("example.com", VALID_BODY).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.public_message(), "Error processing the request: throttled");
    }

    #[tokio::test]
    async fn test_captcha_failure_sends_nothing() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha
            .expect_verify()
            .times(1)
            .returning(|_| Ok(CaptchaVerdict::failed(vec!["invalid-input-response".into()])));
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let service = service(known_domain_repo(), captcha, mailer);

        let result = service.submit("example.com", VALID_BODY).await;

        assert!(matches!(result.unwrap_err(), AppError::CaptchaFailed));
    }

    #[tokio::test]
    async fn test_missing_field_is_internal_error() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha.expect_verify().times(0);
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let service = service(known_domain_repo(), captcha, mailer);

        let result = service
            .submit("example.com", br#"{"name": "Ada", "recaptchaToken": "t"}"#)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_captcha_transport_error_is_internal() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha
            .expect_verify()
            .times(1)
            .returning(|_| Err(CaptchaError::Transport("connection refused".into())));
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let service = service(known_domain_repo(), captcha, mailer);

        let result = service.submit("example.com", VALID_BODY).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_mail_failure_is_internal() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha
            .expect_verify()
            .returning(|_| Ok(CaptchaVerdict::passed()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Delivery("MessageRejected".into())));

        let service = service(known_domain_repo(), captcha, mailer);

        let err = service.submit("example.com", VALID_BODY).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("MessageRejected"));
    }

    #[tokio::test]
    async fn test_custom_subject() {
        let mut captcha = MockCaptchaVerifier::new();
        captcha
            .expect_verify()
            .returning(|_| Ok(CaptchaVerdict::passed()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.subject == "Website enquiry")
            .times(1)
            .returning(|_| Ok(()));

        let service =
            service(known_domain_repo(), captcha, mailer).with_subject("Website enquiry");

        assert!(service.submit("example.com", VALID_BODY).await.is_ok());
    }
}
