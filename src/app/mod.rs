//! Application orchestration.
//!
//! Drives the collection cycle: every enabled account is collected through
//! its provider, the snapshot is persisted, and the HTML report is
//! reassembled from whatever stats are on disk.

mod error;
#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::join_all;
use tracing::{info, warn};

pub use error::AppError;

use crate::config::{AccountConfig, Config};
use crate::providers::{self, StatsProvider};
use crate::report::HtmlReporter;
use crate::storage::{JsonFileStorage, StatsStorage};

pub struct App {
    cfg: Config,
    providers: HashMap<String, Arc<dyn StatsProvider>>,
    storage: Arc<dyn StatsStorage>,
    reporter: HtmlReporter,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let storage: Arc<dyn StatsStorage> =
            Arc::new(JsonFileStorage::new(&cfg.storage.stats_dir));
        let reporter = HtmlReporter::new(&cfg, Arc::clone(&storage));

        Self {
            providers: providers::registry(),
            cfg,
            storage,
            reporter,
        }
    }

    fn interval(&self) -> Duration {
        self.cfg
            .collector
            .as_ref()
            .map(|c| c.interval)
            .unwrap_or(Duration::ZERO)
    }

    fn report_enabled(&self) -> bool {
        self.cfg.report.as_ref().map(|r| r.enabled).unwrap_or(true)
    }

    /// Runs collection cycles until the process is stopped.
    ///
    /// A zero interval means one cycle and return.
    pub async fn start(&self) -> Result<(), AppError> {
        let interval = self.interval();

        info!(
            app = self.cfg.app.name,
            accounts = self.cfg.enabled_accounts().len(),
            interval = ?interval,
            "starting collector"
        );

        if interval.is_zero() {
            self.run_cycle().await;
            return Ok(());
        }

        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// Collects every enabled account once and reassembles the report.
    pub async fn run_cycle(&self) {
        let started_at = Utc::now();

        let accounts = self.cfg.enabled_accounts();
        let tasks = accounts
            .iter()
            .map(|account| self.collect_account(account));
        let collected = join_all(tasks).await.iter().filter(|ok| **ok).count();

        info!(
            collected,
            elapsed = ?(Utc::now() - started_at).to_std().unwrap_or_default(),
            "collection cycle finished"
        );

        if self.report_enabled() {
            if let Err(err) = self.reporter.assemble().await {
                warn!(error = %err, "failed to assemble report");
            }
        }
    }

    /// Assembles the report from persisted stats without collecting.
    pub async fn assemble_report(&self) -> Result<(), AppError> {
        self.reporter.assemble().await?;
        Ok(())
    }

    async fn collect_account(&self, account: &AccountConfig) -> bool {
        let Some(provider) = self.providers.get(&account.provider) else {
            warn!(
                account = account.name,
                provider = account.provider,
                "unknown provider, skipping account"
            );
            return false;
        };

        let stats = match provider.get(account).await {
            Ok(stats) => stats,
            Err(err) => {
                warn!(account = account.name, error = %err, "failed to collect account");
                return false;
            }
        };

        if stats.is_empty() {
            warn!(account = account.name, "no metrics extracted from account pages");
        }

        if let Err(err) = self.storage.save(&account.name, &stats).await {
            warn!(account = account.name, error = %err, "failed to persist stats");
            return false;
        }

        info!(account = account.name, "account collected");
        true
    }
}
