//! Application-level configuration.

use serde::Deserialize;

/// Top-level application identity and logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application name, shown in startup log lines.
    pub name: String,
    /// Deployment environment label ("development", "production", ...).
    /// Informational only.
    #[serde(default)]
    pub env: String,
    /// Logging verbosity ("trace", "debug", "info", "warn", "error").
    /// Overridable via RUST_LOG; defaults to "info".
    pub log_level: Option<String>,
}
