//! CAPTCHA verification.
//!
//! - [`CaptchaVerifier`] - Trait implemented by verification backends
//! - [`RecaptchaVerifier`] - Google reCAPTCHA `siteverify` client

pub mod recaptcha;
pub mod service;

pub use recaptcha::{DEFAULT_VERIFY_URL, RecaptchaVerifier};
pub use service::{CaptchaError, CaptchaVerdict, CaptchaVerifier};

#[cfg(test)]
pub use service::MockCaptchaVerifier;
