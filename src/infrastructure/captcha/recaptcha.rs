//! Google reCAPTCHA verification client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::service::{CaptchaError, CaptchaVerdict, CaptchaVerifier};

/// Production `siteverify` endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Body returned by `siteverify`.
///
/// Only `success` decides the outcome; v3 fields (`score`, `action`) are
/// read for logging.
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    #[serde(default)]
    success: bool,
    hostname: Option<String>,
    score: Option<f64>,
    action: Option<String>,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Verifies tokens by form-POSTing `secret` and `response` to `siteverify`.
///
/// The HTTP client is built once and reused across invocations.
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    verify_url: String,
    secret: String,
}

impl RecaptchaVerifier {
    /// Creates a verifier for `verify_url` using the shared `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        verify_url: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CaptchaError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CaptchaError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            verify_url: verify_url.into(),
            secret: secret.into(),
        })
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict, CaptchaError> {
        let params = [("secret", self.secret.as_str()), ("response", token)];

        let response = self
            .client
            .post(&self.verify_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| CaptchaError::Transport(e.to_string()))?;

        let status = response.status();
        let body: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|e| CaptchaError::InvalidResponse(format!("HTTP {status}: {e}")))?;

        debug!(
            success = body.success,
            hostname = ?body.hostname,
            score = ?body.score,
            action = ?body.action,
            "reCAPTCHA verdict received"
        );

        Ok(CaptchaVerdict {
            success: body.success,
            hostname: body.hostname,
            error_codes: body.error_codes,
        })
    }
}
