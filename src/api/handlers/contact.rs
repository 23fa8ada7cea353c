//! Handler for contact form submissions.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode},
};
use tracing::debug;

use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Relays a contact form submission to the owner of the calling site.
///
/// # Endpoint
///
/// `POST /contact` (also mounted at `POST /`)
///
/// # Request Flow
///
/// 1. Resolve the calling domain from `Origin`/`Referer` or the configured header
/// 2. Look up the domain's routing entry
/// 3. Parse the JSON body
/// 4. Verify the reCAPTCHA token
/// 5. Send the email and answer 200 (or 201, if configured)
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "message": "Hello!",
///   "telephone": "555-0100",      // optional
///   "recaptchaToken": "03AGdBq2..." // or "recaptcha_response"
/// }
/// ```
///
/// The body is taken as raw bytes so that a malformed payload reaches the
/// catch-all error path instead of axum's JSON rejection. A body that cannot
/// be buffered (e.g. over the body limit) is reported the same way.
///
/// # Errors
///
/// - 400 / 401 if the domain cannot be determined or has no routing entry
/// - 400 if reCAPTCHA verification fails
/// - 500 for anything else, including malformed bodies
pub async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let domain = state.domain_source.extract(&headers)?;
    debug!(domain = %domain, "Contact request received");

    let body = body.map_err(|rejection| AppError::internal(rejection.body_text()))?;

    state
        .contact_service
        .submit(&domain, &body)
        .await
        .map_err(|err| state.domain_source.reject(err))?;

    Ok((state.success_status, Json(MessageResponse::new(SUCCESS_MESSAGE))))
}
