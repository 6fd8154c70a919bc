//! Per-symbol aggregated statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// SymbolStats holds the aggregated profit for one tradable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStats {
    /// Instrument identifier (e.g. "EURUSD"). Unique within one snapshot.
    pub name: String,
    /// Aggregated profit in the account currency.
    pub profit: Decimal,
    /// Aggregated profit as a percentage.
    pub profit_percent: Decimal,
}

impl SymbolStats {
    pub fn new(name: impl Into<String>, profit: Decimal, profit_percent: Decimal) -> Self {
        Self {
            name: name.into(),
            profit,
            profit_percent,
        }
    }
}
