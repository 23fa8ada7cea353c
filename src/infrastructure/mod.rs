//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports used by the contact chain.
//!
//! # Modules
//!
//! - [`captcha`] - CAPTCHA verification (Google reCAPTCHA)
//! - [`mail`] - Email delivery (Amazon SES and a log-only dry-run mailer)
//! - [`persistence`] - Routing table repositories (DynamoDB and in-memory)

pub mod captcha;
pub mod mail;
pub mod persistence;
