//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /contact`, `POST /` - Contact form relay
//! - `GET  /health`            - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser preflight handling
//! - **Panic recovery** - Panics become the generic 500 response
//!
//! Trailing-slash normalization wraps the router in [`crate::server`].

use crate::api;
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed CORS origins; empty allows any origin
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    api::routes::contact_routes()
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}
