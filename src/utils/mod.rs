//! Request helpers.
//!
//! - [`extract_domain`] - Calling-domain extraction from HTTP headers

pub mod extract_domain;
