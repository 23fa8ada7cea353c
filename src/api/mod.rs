//! HTTP layer for the contact endpoint.
//!
//! This layer translates HTTP requests into calls on
//! [`crate::application::services::ContactService`] and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS, panic recovery and tracing layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
