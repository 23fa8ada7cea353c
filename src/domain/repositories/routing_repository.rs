//! Repository trait for the domain routing table.

use crate::domain::entities::RoutingEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Access to the table mapping domains to sender/recipient pairs.
///
/// The contact handler only ever calls [`RoutingRepository::find_by_host`];
/// the write operations back the `admin` CLI.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::DynamoRoutingRepository`] - DynamoDB table
/// - [`crate::infrastructure::persistence::InMemoryRoutingRepository`] - local runs and tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoutingRepository: Send + Sync {
    /// Finds the entry for a host (e.g., "example.com").
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the table cannot be read or the
    /// stored item is malformed.
    async fn find_by_host(&self, host: &str) -> Result<Option<RoutingEntry>, AppError>;

    /// Creates or replaces the entry keyed by `entry.host`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn put(&self, entry: RoutingEntry) -> Result<(), AppError>;

    /// Removes an entry. Returns `false` if there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, host: &str) -> Result<bool, AppError>;

    /// Lists all entries, ordered by host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<RoutingEntry>, AppError>;
}
