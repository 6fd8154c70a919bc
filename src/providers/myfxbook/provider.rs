//! Myfxbook summary and trade-listing extraction.

use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::AccountConfig;
use crate::dom::{Document, DomNode};
use crate::domain::{AccountStats, SymbolStats};
use crate::extract::landmark;
use crate::extract::metrics;
use crate::extract::numeric;
use crate::extract::paging;
use crate::extract::symbols;
use crate::providers::{ProviderError, Result, StatsProvider};

use super::client::Client;

const PROVIDER_NAME: &str = "myfxbook";
const BASE_URL: &str = "https://www.myfxbook.com";

/// Summary metrics are list items with a floated label span and a value
/// span; the selector pair is shared by every landmark on the page.
const SUMMARY_SCOPE_SELECTOR: &str = "li";
const LABEL_REGION_SELECTOR: &str = "span.floatLeft";
const VALUE_REGION_SELECTOR: &str = "span.floatNone";

/// Period profits sit in table rows of the summary page.
const PERIOD_ROW_SELECTOR: &str = "tr";
const PERIOD_CELL_SELECTOR: &str = "td";

/// Trade listing rows and the paging indicator inside the open-trades pane.
const TRADES_ROW_SELECTOR: &str = "#openTrades tr";
const PAGING_INDICATOR_SELECTOR: &str = "#openTrades .paging";

const BALANCE_MARKER: &str = "Balance";
const EQUITY_MARKER: &str = "Equity";
const PROFIT_MARKER: &str = "Profit";
const DEPOSITS_MARKER: &str = "Deposits";
const WITHDRAWALS_MARKER: &str = "Withdrawals";

/// Collects account statistics from myfxbook's HTML pages.
pub struct MyfxbookProvider {
    client: Client,
}

impl MyfxbookProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Derives the trade-page fetch targets from the summary document.
    fn plan_pages(&self, summary: &Document, account: &AccountConfig) -> Result<Vec<String>> {
        let count = paging::page_count(&summary.root(), PAGING_INDICATOR_SELECTOR);
        let id = paging::account_id(&account.location)
            .ok_or_else(|| ProviderError::MissingAccountId(account.location.clone()))?;
        debug!(pages = count, account_id = id, "planned trade pages");
        Ok(paging::page_urls(BASE_URL, id, count))
    }
}

impl Default for MyfxbookProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for MyfxbookProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get(&self, account: &AccountConfig) -> Result<AccountStats> {
        info!(account = %account.name, location = %account.location, "collecting account stats");

        let summary = self.client.fetch_document(&account.location).await?;

        let mut stats = AccountStats::default();
        extract_summary(&summary, account, &mut stats);

        let pages = self.plan_pages(&summary, account)?;
        let fetched = join_all(pages.iter().map(|url| self.client.fetch_document(url))).await;

        let mut docs = Vec::with_capacity(fetched.len());
        for (url, result) in pages.iter().zip(fetched) {
            match result {
                Ok(doc) => docs.push(doc),
                // A failed page contributes zero rows; the run continues.
                Err(e) => warn!(url = %url, error = %e, "trade page fetch failed"),
            }
        }

        stats.symbol_stats = aggregate_symbols(&docs, account.currency_divider);
        stats.updated_at = Some(Utc::now());

        info!(
            account = %account.name,
            symbols = stats.symbol_stats.len(),
            "account stats collected"
        );
        Ok(stats)
    }
}

/// Pulls the primary metrics, derived drawdowns and period profits from the
/// account summary document into `stats`. Fields not found stay absent.
pub(super) fn extract_summary(doc: &Document, account: &AccountConfig, stats: &mut AccountStats) {
    let divider = account.currency_divider;

    for item in doc.select(SUMMARY_SCOPE_SELECTOR) {
        if let Some(balance) = summary_metric(&item, BALANCE_MARKER) {
            stats.balance = Some(numeric::normalize_currency(balance, divider));
        }
        if let Some(equity) = equity_metric(&item) {
            stats.equity = Some(numeric::normalize_currency(equity, divider));
        }
        if let Some(profit) = summary_metric(&item, PROFIT_MARKER) {
            stats.profit = Some(numeric::normalize_currency(profit, divider));
        }
        if let Some(deposits) = summary_metric(&item, DEPOSITS_MARKER) {
            stats.deposits = Some(numeric::normalize_currency(deposits, divider));
        }
        if let Some(withdrawals) = summary_metric(&item, WITHDRAWALS_MARKER) {
            stats.withdrawals = Some(numeric::normalize_currency(withdrawals, divider));
        }
    }

    stats.drawdown = metrics::drawdown(stats.balance, stats.equity);
    stats.overall_drawdown =
        metrics::overall_drawdown(stats.deposits, stats.withdrawals, stats.equity);

    (stats.day_profit_money, stats.day_profit_percent) = period_values(doc, "Today", divider);
    (stats.week_profit_money, stats.week_profit_percent) = period_values(doc, "This Week", divider);
    (stats.month_profit_money, stats.month_profit_percent) =
        period_values(doc, "This Month", divider);
    (stats.year_profit_money, stats.year_profit_percent) = period_values(doc, "This Year", divider);
}

fn summary_metric<N: DomNode>(item: &N, marker: &str) -> Option<Decimal> {
    landmark::labeled_numeric(item, marker, LABEL_REGION_SELECTOR, VALUE_REGION_SELECTOR)
}

/// The equity landmark needs a post-step: its raw text is
/// "<percent> <money>" and only the trailing token is the money amount.
fn equity_metric<N: DomNode>(item: &N) -> Option<Decimal> {
    let raw = landmark::labeled_value(
        item,
        EQUITY_MARKER,
        LABEL_REGION_SELECTOR,
        VALUE_REGION_SELECTOR,
    )?;

    let Some(money) = landmark::money_after_last_space(&raw) else {
        warn!(raw = raw.trim(), "equity value has unexpected layout");
        return None;
    };

    match numeric::parse_numeric(money) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "equity value is not numeric");
            None
        }
    }
}

/// Scans the summary rows for a period label and returns its normalized
/// (money, percent) pair, or absent when the period is not on the page.
fn period_values(doc: &Document, marker: &str, divider: i64) -> (Option<Decimal>, Option<Decimal>) {
    for row in doc.select(PERIOD_ROW_SELECTOR) {
        match landmark::period_profit(&row, marker, PERIOD_CELL_SELECTOR) {
            Ok((Some(money), Some(percent))) => {
                return (
                    Some(numeric::normalize_currency(money, divider)),
                    Some(numeric::round2(percent)),
                );
            }
            Ok(_) => {}
            Err(e) => warn!(marker, error = %e, "cannot extract period profit"),
        }
    }
    (None, None)
}

/// Folds the trade rows of all fetched pages into one per-symbol aggregate.
///
/// Column roles resolve from the first header row seen in the run; later
/// pages share the layout and their header rows are skipped. Any row that
/// fails extraction is discarded whole.
pub(super) fn aggregate_symbols(docs: &[Document], divider: i64) -> Vec<SymbolStats> {
    let mut roles = symbols::ColumnRoles::default();
    let mut header_seen = false;
    let mut aggregate: Vec<SymbolStats> = Vec::new();

    for doc in docs {
        for (row_index, row) in doc.select(TRADES_ROW_SELECTOR).iter().enumerate() {
            if row_index == 0 {
                if !header_seen {
                    roles = symbols::ColumnRoles::resolve(row);
                    header_seen = true;
                    if !roles.complete() {
                        warn!(?roles, "trade table header did not resolve all columns");
                    }
                }
                continue;
            }

            match symbols::read_row(row, &roles) {
                Ok(mut triple) => {
                    triple.profit = numeric::normalize_currency(triple.profit, divider);
                    triple.profit_percent = numeric::round2(triple.profit_percent);
                    debug!(symbol = %triple.name, profit = %triple.profit, "trade row");
                    symbols::merge_symbol(&mut aggregate, triple);
                }
                Err(e) => warn!(row = row_index, error = %e, "discarding trade row"),
            }
        }
    }

    aggregate
}
