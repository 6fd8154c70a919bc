//! Application error types.

use crate::report::ReportError;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
