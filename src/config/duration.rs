//! Serde adapter for human-readable durations ("30s", "5m", "1h").

use serde::{self, Deserialize, Deserializer};
use std::time::Duration;

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_duration(&raw).map_err(serde::de::Error::custom),
        None => Ok(Duration::ZERO),
    }
}

/// Parses a number followed by a unit suffix. A bare number counts as
/// seconds; an empty string is zero (meaning "disabled" for intervals).
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Duration::ZERO);
    }

    let unit_start = raw
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(raw.len());
    let value: f64 = raw[..unit_start]
        .parse()
        .map_err(|_| format!("invalid duration number: {}", &raw[..unit_start]))?;

    let seconds_per_unit = match raw[unit_start..].trim() {
        "" | "s" => 1.0,
        "ms" => 1e-3,
        "m" => 60.0,
        "h" => 3600.0,
        other => return Err(format!("unknown duration unit: {}", other)),
    };

    Ok(Duration::from_secs_f64(value * seconds_per_unit))
}
