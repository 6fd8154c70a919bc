//! Account statistics snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SymbolStats;

/// AccountStats is one collected snapshot of an account's metrics.
///
/// Every scalar metric is optional: `None` means the value was not found on
/// the source page, which is distinct from a value of zero. Absent fields are
/// omitted from the serialized form so downstream rendering can tell the two
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    /// Account balance in the account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    /// Current equity in the account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<Decimal>,
    /// Total profit in the account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<Decimal>,
    /// Total deposits in the account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposits: Option<Decimal>,
    /// Total withdrawals in the account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Decimal>,
    /// Equity decline relative to balance, as a negative percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawdown: Option<Decimal>,
    /// Equity decline relative to net deposited capital, as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_drawdown: Option<Decimal>,
    /// Profit for the current day, as money.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_profit_money: Option<Decimal>,
    /// Profit for the current day, as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_profit_percent: Option<Decimal>,
    /// Profit for the current week, as money.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_profit_money: Option<Decimal>,
    /// Profit for the current week, as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_profit_percent: Option<Decimal>,
    /// Profit for the current month, as money.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_profit_money: Option<Decimal>,
    /// Profit for the current month, as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_profit_percent: Option<Decimal>,
    /// Profit for the current year, as money.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_profit_money: Option<Decimal>,
    /// Profit for the current year, as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_profit_percent: Option<Decimal>,
    /// Per-symbol profit aggregated across all result pages.
    /// At most one entry per symbol name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbol_stats: Vec<SymbolStats>,
    /// When this snapshot was collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountStats {
    /// Returns true if no metric was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.balance.is_none()
            && self.equity.is_none()
            && self.profit.is_none()
            && self.deposits.is_none()
            && self.withdrawals.is_none()
            && self.drawdown.is_none()
            && self.overall_drawdown.is_none()
            && self.day_profit_money.is_none()
            && self.week_profit_money.is_none()
            && self.month_profit_money.is_none()
            && self.year_profit_money.is_none()
            && self.symbol_stats.is_empty()
    }
}
