use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::message::MessageResponse;
use crate::infrastructure::captcha::CaptchaError;
use crate::infrastructure::mail::MailError;

/// Errors surfaced to callers of the contact endpoint.
///
/// Every failure that is not one of the client-facing kinds ends up in
/// [`AppError::Internal`] and is rendered as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Domain {domain} not found in lookup table")]
    DomainNotFound { domain: String },

    #[error("reCAPTCHA verification failed")]
    CaptchaFailed,

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn domain_not_found(domain: impl Into<String>) -> Self {
        Self::DomainNotFound {
            domain: domain.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. }
            | AppError::DomainNotFound { .. }
            | AppError::CaptchaFailed => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the JSON body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal { message } => {
                format!("Error processing the request: {message}")
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Contact request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Contact request rejected");
        }

        (status, Json(MessageResponse::new(self.public_message()))).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::internal(e.to_string())
    }
}

impl From<CaptchaError> for AppError {
    fn from(e: CaptchaError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl From<MailError> for AppError {
    fn from(e: MailError) -> Self {
        AppError::internal(e.to_string())
    }
}
