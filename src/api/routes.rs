//! API route configuration.

use crate::api::handlers::{contact_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Contact form routes.
///
/// # Endpoints
///
/// - `POST /contact` - Relay a contact form submission
/// - `POST /`        - Same handler, for API Gateway integrations mapped to the stage root
/// - `GET  /health`  - Liveness check
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact_handler))
        .route("/contact", post(contact_handler))
        .route("/health", get(health_handler))
}
