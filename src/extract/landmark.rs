//! Landmark-based value extraction.
//!
//! The source pages carry no stable field identifiers; values are located by
//! the label text printed next to them. All lookups are generic over
//! [`DomNode`] so they can run against any document-tree adapter.

use rust_decimal::Decimal;
use tracing::warn;

use crate::dom::DomNode;

use super::numeric::{NumericError, parse_numeric};

/// The percent cell sits immediately after the period label cell,
/// and the money cell one further. Layout quirk of the summary table;
/// label, percent and money appear in exactly that order.
pub const PERIOD_PERCENT_OFFSET: usize = 1;
pub const PERIOD_MONEY_OFFSET: usize = 2;

/// Inline values inside period cells are wrapped in a span.
const INLINE_VALUE_SELECTOR: &str = "span";

/// Reads the raw text of the value region within `scope` if the label region
/// text contains `marker`.
///
/// The label region may carry decoration around the marker, so the match is
/// a substring match. Returns `None` when the label does not match — a valid,
/// silent outcome, not a failure.
pub fn labeled_value<N: DomNode>(
    scope: &N,
    marker: &str,
    label_selector: &str,
    value_selector: &str,
) -> Option<String> {
    let label: String = scope
        .select(label_selector)
        .iter()
        .map(DomNode::text)
        .collect();
    if !label.contains(marker) {
        return None;
    }

    let value: String = scope
        .select(value_selector)
        .iter()
        .map(DomNode::text)
        .collect();
    Some(value)
}

/// [`labeled_value`] followed by numeric normalization.
///
/// A fragment that is present but non-numeric is logged and treated as
/// absent; extraction always continues.
pub fn labeled_numeric<N: DomNode>(
    scope: &N,
    marker: &str,
    label_selector: &str,
    value_selector: &str,
) -> Option<Decimal> {
    let raw = labeled_value(scope, marker, label_selector, value_selector)?;
    match parse_numeric(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(marker, error = %e, "labeled value is not numeric");
            None
        }
    }
}

/// Takes the token after the last space of a raw landmark value.
///
/// The equity landmark prints a percentage before the monetary value
/// ("+5% 9,500.00"); only the trailing token is the money amount. Returns
/// `None` when the raw text has no space to split on.
pub fn money_after_last_space(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    trimmed.rfind(' ').map(|i| &trimmed[i + 1..])
}

/// Extracts the (money, percent) pair for a named time period from a
/// row-oriented layout.
///
/// Finds the cell matching `cell_selector` whose text contains `marker`;
/// the percent value is the first inline value of the next sibling cell, the
/// money value the first inline value of the cell two siblings on. Rows
/// without the label cell yield `(None, None)`. A located cell whose text is
/// not numeric is an error.
pub fn period_profit<N: DomNode>(
    row: &N,
    marker: &str,
    cell_selector: &str,
) -> Result<(Option<Decimal>, Option<Decimal>), NumericError> {
    let cells = row.select(cell_selector);
    let Some(label) = cells.iter().find(|c| c.text().contains(marker)) else {
        return Ok((None, None));
    };

    let money = first_inline_value(nth_sibling(label, PERIOD_MONEY_OFFSET))?;
    let percent = first_inline_value(nth_sibling(label, PERIOD_PERCENT_OFFSET))?;
    Ok((money, percent))
}

fn nth_sibling<N: DomNode>(node: &N, offset: usize) -> Option<N> {
    let mut current = node.next_sibling();
    for _ in 1..offset {
        current = current.as_ref().and_then(DomNode::next_sibling);
    }
    current
}

fn first_inline_value<N: DomNode>(cell: Option<N>) -> Result<Option<Decimal>, NumericError> {
    let Some(cell) = cell else {
        return Ok(None);
    };
    match cell.select(INLINE_VALUE_SELECTOR).first() {
        Some(value) => parse_numeric(&value.text()),
        None => Ok(None),
    }
}
