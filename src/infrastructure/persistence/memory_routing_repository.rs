//! In-memory routing repository.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::RoutingEntry;
use crate::domain::repositories::RoutingRepository;
use crate::error::AppError;

/// A routing table held in process memory.
///
/// Used when `ROUTING_FILE` points at a JSON array of entries, and by
/// integration tests. Contents are lost when the process exits.
///
/// ```json
/// [
///   { "host": "example.com", "recipient": "owner@example.com", "sender": "noreply@example.com" }
/// ]
/// ```
#[derive(Default)]
pub struct InMemoryRoutingRepository {
    entries: RwLock<BTreeMap<String, RoutingEntry>>,
}

impl InMemoryRoutingRepository {
    pub fn new(entries: impl IntoIterator<Item = RoutingEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.host.clone(), entry))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Loads entries from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// entries, or contains an entry that fails [`RoutingEntry::validate`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read routing file {}", path.display()))?;
        let entries: Vec<RoutingEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid routing file {}", path.display()))?;

        for entry in &entries {
            entry
                .validate()
                .map_err(|reason| anyhow::anyhow!("Invalid routing entry: {reason}"))?;
        }

        debug!(count = entries.len(), "Loaded routing entries from file");
        Ok(Self::new(entries))
    }
}

#[async_trait]
impl RoutingRepository for InMemoryRoutingRepository {
    async fn find_by_host(&self, host: &str) -> Result<Option<RoutingEntry>, AppError> {
        Ok(self.entries.read().await.get(host).cloned())
    }

    async fn put(&self, entry: RoutingEntry) -> Result<(), AppError> {
        self.entries.write().await.insert(entry.host.clone(), entry);
        Ok(())
    }

    async fn delete(&self, host: &str) -> Result<bool, AppError> {
        Ok(self.entries.write().await.remove(host).is_some())
    }

    async fn list(&self) -> Result<Vec<RoutingEntry>, AppError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}
