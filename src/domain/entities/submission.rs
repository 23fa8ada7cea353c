//! Contact form submission.

use serde::Deserialize;

/// Fields posted by a contact form.
///
/// Values are taken as-is; only their presence is required. The CAPTCHA
/// token is accepted under both names used by the front-end widgets.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(rename = "recaptchaToken", alias = "recaptcha_response")]
    pub captcha_token: String,
}

impl Submission {
    /// Parses a submission from a raw JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for empty bodies, non-JSON input and
    /// missing required fields.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
