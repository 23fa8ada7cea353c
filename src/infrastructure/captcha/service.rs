//! CAPTCHA verifier trait and error types.

use async_trait::async_trait;

/// Errors that prevent a verdict from being obtained.
///
/// A token that the verifier rejects is *not* an error; it is a
/// [`CaptchaVerdict`] with `success == false`.
#[derive(Debug, thiserror::Error)]
pub enum CaptchaError {
    #[error("CAPTCHA verifier unreachable: {0}")]
    Transport(String),

    #[error("CAPTCHA verifier returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Outcome reported by the verification service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptchaVerdict {
    pub success: bool,
    /// Site the token was issued for, when the service reports it.
    pub hostname: Option<String>,
    pub error_codes: Vec<String>,
}

impl CaptchaVerdict {
    pub fn passed() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(error_codes: Vec<String>) -> Self {
        Self {
            success: false,
            hostname: None,
            error_codes,
        }
    }
}

/// Confirms that a client-submitted token proves human interaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::captcha::RecaptchaVerifier`] - Google reCAPTCHA
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Submits `token` to the verification service.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError`] when the service cannot be reached or answers
    /// with something other than a verdict.
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict, CaptchaError>;
}
