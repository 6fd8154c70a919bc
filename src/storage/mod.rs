//! Storage interfaces and implementations for persisting account stats.

mod json;

pub use json::JsonFileStorage;

use crate::domain::AccountStats;
use async_trait::async_trait;

/// StatsStorage defines the interface for persisting collected snapshots.
///
/// One snapshot is kept per account; saving overwrites the previous one.
/// The serialized form must keep absent fields distinguishable from zero,
/// since downstream rendering depends on that.
#[async_trait]
pub trait StatsStorage: Send + Sync {
    /// Save persists the snapshot for the named account.
    async fn save(&self, account_name: &str, stats: &AccountStats) -> Result<(), StorageError>;

    /// Load retrieves the last persisted snapshot for the named account.
    async fn load(&self, account_name: &str) -> Result<AccountStats, StorageError>;
}

/// StorageError represents errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stats data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
