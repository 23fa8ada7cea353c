//! Application layer services implementing the contact chain.
//!
//! Services consume the domain and infrastructure ports and provide a small
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Routing lookup, CAPTCHA check and delivery

pub mod services;
