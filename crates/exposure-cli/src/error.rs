//! CLI error types.

use exposure_core::ExposureError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A holdings row could not be read.
    #[error("Invalid holding in {source_name} line {line}: {message}")]
    InvalidHolding {
        /// File name or "arguments".
        source_name: String,
        /// 1-based line or argument position.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// No holdings were given.
    #[error("No holdings given. Pass TICKER=AMOUNT pairs or --input <FILE>.")]
    NoHoldings,

    /// Area not present in the chart.
    #[error("Unknown area: {0}")]
    UnknownArea(String),

    /// Portfolio rejected by the domain model.
    #[error(transparent)]
    Exposure(#[from] ExposureError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates an invalid holding error.
    pub fn invalid_holding(
        source_name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidHolding {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
