//! # Contact Form Relay
//!
//! A serverless function that relays website contact forms to the site
//! owner's mailbox, built with Axum and deployed on AWS Lambda.
//!
//! ## Request Flow
//!
//! 1. The calling domain is read from `Origin`/`Referer` or a custom header
//! 2. The domain is looked up in a routing table (DynamoDB) to find the
//!    sender/recipient pair
//! 3. The reCAPTCHA token in the body is verified
//! 4. A plain-text email is sent through Amazon SES
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the routing repository trait
//! - **Application Layer** ([`application`]) - The contact chain
//! - **Infrastructure Layer** ([`infrastructure`]) - DynamoDB, reCAPTCHA and SES clients
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export RECAPTCHA_KEY="your-secret"
//! export ROUTING_FILE="routes.json"   # skip DynamoDB locally
//! export MAIL_DRY_RUN=true            # log instead of sending
//! cargo run
//! ```
//!
//! Under Lambda the same binary serves API Gateway events.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContactService;
    pub use crate::domain::entities::{OutboundEmail, RoutingEntry, Submission};
    pub use crate::domain::repositories::RoutingRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::captcha::{CaptchaError, CaptchaVerdict, CaptchaVerifier};
    pub use crate::infrastructure::mail::{MailError, Mailer};
    pub use crate::state::AppState;
    pub use crate::utils::extract_domain::DomainSource;
}
