//! HTTP middleware for request processing.
//!
//! Provides CORS, panic recovery and observability layers.

pub mod cors;
pub mod panic;
pub mod tracing;
