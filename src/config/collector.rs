//! Collection loop configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Settings for the periodic collection loop.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Interval between collection cycles (e.g. "5m").
    /// Zero means collect once and exit.
    #[serde(default, with = "duration")]
    pub interval: Duration,
}
