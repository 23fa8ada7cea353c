#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use contact_form_relay::application::services::ContactService;
use contact_form_relay::domain::entities::{OutboundEmail, RoutingEntry};
use contact_form_relay::domain::repositories::RoutingRepository;
use contact_form_relay::error::AppError;
use contact_form_relay::infrastructure::captcha::{CaptchaError, CaptchaVerdict, CaptchaVerifier};
use contact_form_relay::infrastructure::mail::{MailError, Mailer};
use contact_form_relay::infrastructure::persistence::InMemoryRoutingRepository;
use contact_form_relay::state::AppState;

pub const KNOWN_HOST: &str = "example.com";
pub const RECIPIENT: &str = "owner@example.com";
pub const SENDER: &str = "noreply@example.com";

/// Verifier returning a fixed verdict and counting calls.
pub struct CountingCaptcha {
    success: bool,
    calls: AtomicUsize,
    tokens: Mutex<Vec<String>>,
}

impl CountingCaptcha {
    pub fn passing() -> Arc<Self> {
        Arc::new(Self {
            success: true,
            calls: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            success: false,
            calls: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptchaVerifier for CountingCaptcha {
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict, CaptchaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(token.to_string());
        if self.success {
            Ok(CaptchaVerdict::passed())
        } else {
            Ok(CaptchaVerdict::failed(vec!["invalid-input-response".into()]))
        }
    }
}

/// Mailer that records every email instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer whose delivery panics.
pub struct PanickingMailer;

#[async_trait]
impl Mailer for PanickingMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
        panic!("mail transport poisoned");
    }
}

/// Routing table whose every call fails like a throttled store.
pub struct FailingRouting;

#[async_trait]
impl RoutingRepository for FailingRouting {
    async fn find_by_host(&self, _host: &str) -> Result<Option<RoutingEntry>, AppError> {
        Err(AppError::internal("Routing table error: throttled"))
    }

    async fn put(&self, _entry: RoutingEntry) -> Result<(), AppError> {
        Err(AppError::internal("Routing table error: throttled"))
    }

    async fn delete(&self, _host: &str) -> Result<bool, AppError> {
        Err(AppError::internal("Routing table error: throttled"))
    }

    async fn list(&self) -> Result<Vec<RoutingEntry>, AppError> {
        Err(AppError::internal("Routing table error: throttled"))
    }
}

pub struct TestContext {
    pub state: AppState,
    pub captcha: Arc<CountingCaptcha>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn routing_table() -> Arc<InMemoryRoutingRepository> {
    Arc::new(InMemoryRoutingRepository::new([RoutingEntry::new(
        KNOWN_HOST, RECIPIENT, SENDER,
    )]))
}

pub fn create_test_context(captcha: Arc<CountingCaptcha>) -> TestContext {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactService::new(routing_table(), captcha.clone(), mailer.clone());

    TestContext {
        state: AppState::new(Arc::new(service)),
        captcha,
        mailer,
    }
}

/// State whose routing lookups always fail.
pub fn create_failing_routing_context(captcha: Arc<CountingCaptcha>) -> TestContext {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactService::new(Arc::new(FailingRouting), captcha.clone(), mailer.clone());

    TestContext {
        state: AppState::new(Arc::new(service)),
        captcha,
        mailer,
    }
}

/// State whose mailer panics on send.
pub fn create_panicking_mailer_state() -> AppState {
    let service = ContactService::new(
        routing_table(),
        CountingCaptcha::passing(),
        Arc::new(PanickingMailer),
    );
    AppState::new(Arc::new(service))
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@visitor.test",
        "message": "Hello there",
        "recaptchaToken": "token-123"
    })
}
