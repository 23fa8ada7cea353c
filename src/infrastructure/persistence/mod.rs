//! Routing table repository implementations.
//!
//! # Repositories
//!
//! - [`DynamoRoutingRepository`] - DynamoDB table keyed by `Host`
//! - [`InMemoryRoutingRepository`] - Map seeded from a JSON file, for local runs and tests

pub mod dynamo_routing_repository;
pub mod memory_routing_repository;

pub use dynamo_routing_repository::DynamoRoutingRepository;
pub use memory_routing_repository::InMemoryRoutingRepository;
