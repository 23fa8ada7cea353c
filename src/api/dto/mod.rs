//! Data Transfer Objects for API responses.
//!
//! The request body is parsed into [`crate::domain::entities::Submission`]
//! by the service, after the routing lookup.

pub mod health;
pub mod message;
