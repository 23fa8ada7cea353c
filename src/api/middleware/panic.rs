//! Panic recovery.

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::AppError;

/// Converts a handler panic into the same 500 body as any other failure.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected panic".to_string()
    };

    AppError::internal(detail).into_response()
}
