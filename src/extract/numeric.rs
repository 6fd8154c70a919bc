//! Numeric normalization for scraped text fragments.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// A text fragment expected to carry a number did not parse after stripping
/// its decoration.
#[derive(Debug, Error)]
#[error("not a numeric value: {raw:?} (stripped to {stripped:?})")]
pub struct NumericError {
    pub raw: String,
    pub stripped: String,
}

/// Extracts a signed decimal from free text.
///
/// Everything that is not a digit, a decimal point or a hyphen is stripped:
/// currency symbols, thousands separators, whitespace and currency codes all
/// disappear. An empty remainder means the fragment carried no value at all
/// and yields `Ok(None)` — absent, which callers must not conflate with zero.
/// A non-empty remainder that still fails to parse is an error.
pub fn parse_numeric(raw: &str) -> Result<Option<Decimal>, NumericError> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if stripped.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(&stripped)
        .map(Some)
        .map_err(|_| NumericError {
            raw: raw.to_string(),
            stripped,
        })
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies the account's currency divider to a monetary value.
///
/// Some accounts report in minor units; a divider of 0 or 1 means the value
/// is already in major units and passes through unchanged (and unrounded).
/// Percent-valued fields must never go through this.
pub fn normalize_currency(value: Decimal, divider: i64) -> Decimal {
    if divider == 0 || divider == 1 {
        return value;
    }
    round2(value / Decimal::from(divider))
}
