//! Account configuration.

use serde::Deserialize;

fn default_provider() -> String {
    "myfxbook".to_string()
}

fn default_enabled() -> bool {
    true
}

/// Settings for a single tracked account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    /// Account name, used for log lines and the stats file name.
    pub name: String,
    /// URL of the account's public summary page. The account identifier is
    /// the final path segment.
    pub location: String,
    /// Account currency code (e.g. "USD"), shown in the report.
    #[serde(default)]
    pub currency: String,
    /// Divider for accounts reported in minor currency units.
    /// 0 or 1 means values are already in major units.
    #[serde(default)]
    pub currency_divider: i64,
    /// Which provider serves this account's pages.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Whether this account should be collected.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}
