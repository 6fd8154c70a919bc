//! Storage configuration.

use serde::Deserialize;

/// Stats persistence settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for per-account stats files and the rendered report.
    pub stats_dir: String,
}
