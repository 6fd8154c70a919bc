//! JSON file storage: one stats file per account.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::AccountStats;

use super::{StatsStorage, StorageError};

/// Persists each account's snapshot as `{stats_dir}/{account}.json`.
pub struct JsonFileStorage {
    stats_dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(stats_dir: impl Into<PathBuf>) -> Self {
        Self {
            stats_dir: stats_dir.into(),
        }
    }

    fn stats_path(&self, account_name: &str) -> PathBuf {
        self.stats_dir.join(format!("{}.json", account_name))
    }
}

#[async_trait]
impl StatsStorage for JsonFileStorage {
    async fn save(&self, account_name: &str, stats: &AccountStats) -> Result<(), StorageError> {
        fs::create_dir_all(&self.stats_dir).await?;

        let path = self.stats_path(account_name);
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&path, json).await?;

        debug!(account = account_name, path = %path.display(), "stats saved");
        Ok(())
    }

    async fn load(&self, account_name: &str) -> Result<AccountStats, StorageError> {
        let path = self.stats_path(account_name);
        let content = fs::read_to_string(&path).await?;
        let stats = serde_json::from_str(&content)?;
        Ok(stats)
    }
}
