//! Per-symbol profit aggregation across paginated trade listings.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::dom::DomNode;
use crate::domain::SymbolStats;

use super::numeric::{NumericError, parse_numeric, round2};

/// Data rows carry a leading broker-time cell that the header row does not
/// list as a column of its own, so every resolved header index shifts right
/// by one to line up with the data cells.
pub const BROKER_TIME_SHIFT: usize = 1;

const HEADER_CELL_SELECTOR: &str = "th";
const DATA_CELL_SELECTOR: &str = "td";

/// Resolved mapping from column role to data-cell index.
///
/// A role the header row failed to yield stays unresolved; rows referencing
/// it are skipped, never fabricated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnRoles {
    pub name: Option<usize>,
    pub profit: Option<usize>,
    pub profit_percent: Option<usize>,
}

impl ColumnRoles {
    /// Resolves column roles from a header row.
    ///
    /// "Symbol" and "Gain" are exact matches; the profit column header
    /// varies ("Profit", "Profit (USD)", ...) and is matched by substring.
    pub fn resolve<N: DomNode>(header_row: &N) -> Self {
        let mut roles = ColumnRoles::default();
        for (index, cell) in header_row.select(HEADER_CELL_SELECTOR).iter().enumerate() {
            let title = cell.text();
            let title = title.trim();
            if title == "Symbol" {
                roles.name = Some(index + BROKER_TIME_SHIFT);
            }
            if title.contains("Profit") {
                roles.profit = Some(index + BROKER_TIME_SHIFT);
            }
            if title == "Gain" {
                roles.profit_percent = Some(index + BROKER_TIME_SHIFT);
            }
        }
        roles
    }

    /// Returns true if every role resolved to a column.
    pub fn complete(&self) -> bool {
        self.name.is_some() && self.profit.is_some() && self.profit_percent.is_some()
    }
}

/// Why a data row was discarded. Row failures never abort the aggregation;
/// the row is skipped whole so a failed field cannot contribute a zero.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("column roles are unresolved")]
    UnresolvedColumns,
    #[error("no cell at column {0}")]
    MissingCell(usize),
    #[error("empty symbol name at column {0}")]
    EmptyName(usize),
    #[error("no value at column {0}")]
    EmptyValue(usize),
    #[error("column {column}: {source}")]
    BadNumber {
        column: usize,
        source: NumericError,
    },
}

/// One successfully extracted data row.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolRow {
    pub name: String,
    pub profit: Decimal,
    pub profit_percent: Decimal,
}

/// Reads a (name, profit, profit percent) triple from a data row using the
/// resolved column roles.
pub fn read_row<N: DomNode>(row: &N, roles: &ColumnRoles) -> Result<SymbolRow, RowError> {
    let (Some(name_col), Some(profit_col), Some(percent_col)) =
        (roles.name, roles.profit, roles.profit_percent)
    else {
        return Err(RowError::UnresolvedColumns);
    };

    let cells = row.select(DATA_CELL_SELECTOR);

    let name_cell = cells.get(name_col).ok_or(RowError::MissingCell(name_col))?;
    let name = name_cell.text().trim().to_string();
    if name.is_empty() {
        return Err(RowError::EmptyName(name_col));
    }

    let profit = numeric_cell(&cells, profit_col)?;
    let profit_percent = numeric_cell(&cells, percent_col)?;

    Ok(SymbolRow {
        name,
        profit,
        profit_percent,
    })
}

fn numeric_cell<N: DomNode>(cells: &[N], column: usize) -> Result<Decimal, RowError> {
    let cell = cells.get(column).ok_or(RowError::MissingCell(column))?;
    match parse_numeric(&cell.text()) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(RowError::EmptyValue(column)),
        Err(source) => Err(RowError::BadNumber { column, source }),
    }
}

/// Folds one row into the aggregate collection, keyed by symbol name.
///
/// A duplicate name is summed into the existing entry, rounding after each
/// merge step (not once at the end). A new name is appended.
pub fn merge_symbol(aggregate: &mut Vec<SymbolStats>, row: SymbolRow) {
    match aggregate.iter_mut().find(|s| s.name == row.name) {
        Some(existing) => {
            existing.profit = round2(existing.profit + row.profit);
            existing.profit_percent = round2(existing.profit_percent + row.profit_percent);
        }
        None => aggregate.push(SymbolStats::new(row.name, row.profit, row.profit_percent)),
    }
}
