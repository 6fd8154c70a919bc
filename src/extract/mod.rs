//! Extraction-and-aggregation engine for scraped account reports.
//!
//! The input schema is inferred markup, not an API contract: values are
//! located by textual landmarks, numbers arrive wrapped in currency
//! decoration, and completeness depends on walking a paginated sequence of
//! fetches. Every failure mode in here degrades to an absent field or a
//! skipped row; there is no fatal error path.

pub mod landmark;
pub mod metrics;
pub mod numeric;
pub mod paging;
pub mod symbols;

#[cfg(test)]
mod tests;
