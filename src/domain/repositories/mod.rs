//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod routing_repository;

pub use routing_repository::RoutingRepository;

#[cfg(test)]
pub use routing_repository::MockRoutingRepository;
