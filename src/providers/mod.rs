//! Account statistics providers.
//!
//! A provider knows how to turn one tracking site's pages into an
//! [`AccountStats`] snapshot. Extraction inside a provider is best-effort:
//! missing landmarks and bad rows degrade to absent fields, and only a
//! failure to fetch the summary page at all fails the account run.

pub mod myfxbook;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AccountConfig;
use crate::domain::AccountStats;

pub use myfxbook::MyfxbookProvider;

/// Provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("fetch {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The account location does not carry an account identifier.
    #[error("no account id in location {0:?}")]
    MissingAccountId(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// StatsProvider defines the interface for account tracking site
/// integrations.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Name returns the unique identifier of this provider
    /// (e.g. "myfxbook").
    fn name(&self) -> &str;

    /// Get collects one statistics snapshot for the configured account.
    ///
    /// Partial data is normal: fields the source page did not yield stay
    /// absent. Returns an error only when the summary page itself cannot be
    /// fetched.
    async fn get(&self, account: &AccountConfig) -> Result<AccountStats>;
}

/// Builds the registry of all known providers, keyed by provider name.
pub fn registry() -> HashMap<String, Arc<dyn StatsProvider>> {
    let mut providers: HashMap<String, Arc<dyn StatsProvider>> = HashMap::new();
    let myfxbook = Arc::new(MyfxbookProvider::new());
    providers.insert(myfxbook.name().to_string(), myfxbook);
    providers
}
