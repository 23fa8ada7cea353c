//! Domain layer containing the contact-form data model and port definitions.
//!
//! # Architecture
//!
//! - [`entities`] - Routing entries, submissions and outbound emails
//! - [`repositories`] - Routing table access trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - The request chain itself lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
