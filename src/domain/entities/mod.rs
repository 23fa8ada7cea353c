//! Core entities of the contact relay.
//!
//! All of them are ephemeral except [`RoutingEntry`], which is read from the
//! routing table and never written by the request path.
//!
//! - [`RoutingEntry`] - Domain to sender/recipient mapping
//! - [`Submission`] - Fields posted by the contact form
//! - [`OutboundEmail`] - Email composed from a routing entry and a submission

pub mod outbound_email;
pub mod routing_entry;
pub mod submission;

pub use outbound_email::OutboundEmail;
pub use routing_entry::RoutingEntry;
pub use submission::Submission;
