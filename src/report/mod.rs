//! HTML report assembled from persisted account stats.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

use crate::config::{AccountConfig, Config};
use crate::domain::AccountStats;
use crate::storage::StatsStorage;

pub use render::{color_of, plain_value_of, value_of};

const REPORT_FILE_NAME: &str = "index.html";
const DEFAULT_TITLE: &str = "Report stats";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

/// One account's slot on the report page.
pub struct AccountSection {
    pub config: AccountConfig,
    pub stats: AccountStats,
}

/// Renders an overview page of every account with persisted stats.
///
/// Accounts whose stats cannot be loaded are skipped, so a report can still
/// be assembled while some accounts have never been collected.
pub struct HtmlReporter {
    accounts: Vec<AccountConfig>,
    storage: Arc<dyn StatsStorage>,
    report_path: PathBuf,
    title: String,
}

impl HtmlReporter {
    pub fn new(config: &Config, storage: Arc<dyn StatsStorage>) -> Self {
        let title = config
            .report
            .as_ref()
            .and_then(|r| r.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            accounts: config.accounts.clone(),
            storage,
            report_path: PathBuf::from(&config.storage.stats_dir).join(REPORT_FILE_NAME),
            title,
        }
    }

    /// Loads every account's stats and writes the report page.
    pub async fn assemble(&self) -> Result<(), ReportError> {
        let mut sections = Vec::with_capacity(self.accounts.len());
        for account in &self.accounts {
            match self.storage.load(&account.name).await {
                Ok(stats) => sections.push(AccountSection {
                    config: account.clone(),
                    stats,
                }),
                Err(err) => {
                    warn!(account = account.name, error = %err, "no stats for account, skipping");
                }
            }
        }

        let html = render::render_page(&self.title, &sections);
        fs::write(&self.report_path, html).await?;

        info!(path = %self.report_path.display(), accounts = sections.len(), "report assembled");
        Ok(())
    }
}
