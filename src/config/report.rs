//! Report configuration.

use serde::Deserialize;

fn default_enabled() -> bool {
    true
}

/// HTML report settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Whether the report is assembled after each collection cycle.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Report page title. Defaults to "Report stats".
    pub title: Option<String>,
}
