//! Configuration loading and validation for the stats collector.
//!
//! Uses serde_yaml to load YAML configuration files; `.env` support is kept
//! for deployment environments that inject settings that way.

mod account;
mod app;
mod collector;
mod error;
mod report;
mod storage;

pub(crate) mod duration;

pub use account::AccountConfig;
pub use app::AppConfig;
pub use collector::CollectorConfig;
pub use error::ConfigError;
pub use report::ReportConfig;
pub use storage::StorageConfig;

use serde::Deserialize;
use std::fs;

/// Root configuration structure for the stats collector.
///
/// Required sections: app, accounts, storage.
/// Optional sections: collector, report.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Accounts to collect statistics for.
    pub accounts: Vec<AccountConfig>,
    /// Stats persistence settings.
    pub storage: StorageConfig,
    /// Collection loop settings (optional).
    pub collector: Option<CollectorConfig>,
    /// HTML report settings (optional).
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.storage.stats_dir.is_empty() {
            return Err(ConfigError::Validation(
                "storage.stats_dir is required".into(),
            ));
        }

        let mut enabled_accounts = 0;
        for account in &self.accounts {
            if !account.enabled {
                continue;
            }
            enabled_accounts += 1;

            if account.name.is_empty() {
                return Err(ConfigError::Validation("account name is required".into()));
            }

            if !account.location.starts_with("http://")
                && !account.location.starts_with("https://")
            {
                return Err(ConfigError::Validation(format!(
                    "account {}: location must be an http(s) URL",
                    account.name
                )));
            }

            if account.currency_divider < 0 {
                return Err(ConfigError::Validation(format!(
                    "account {}: currency_divider must not be negative",
                    account.name
                )));
            }
        }

        if enabled_accounts == 0 {
            return Err(ConfigError::Validation(
                "at least one account must be enabled".into(),
            ));
        }

        Ok(())
    }

    /// Returns the enabled accounts.
    pub fn enabled_accounts(&self) -> Vec<&AccountConfig> {
        self.accounts.iter().filter(|a| a.enabled).collect()
    }
}
