//! Error types for the Exposure engine.
//!
//! This module defines the error types shared by the core data model and the
//! analytics pipeline, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Exposure operations.
pub type ExposureResult<T> = Result<T, ExposureError>;

/// The main error type for Exposure operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExposureError {
    /// A portfolio holding refers to a fund missing from the exposure table.
    #[error("Unknown fund: {ticker} is not in the exposure table")]
    UnknownFund {
        /// Ticker of the missing fund.
        ticker: String,
    },

    /// A user-entered ticker is not a known fund.
    #[error("{ticker} is not in the set of funds")]
    UnknownTicker {
        /// The ticker as entered.
        ticker: String,
    },

    /// Drill-down requested for a zone with no membership entry.
    #[error("Unknown zone: {zone}")]
    UnknownZone {
        /// The zone code.
        zone: String,
    },

    /// Holding amount is negative or not finite.
    #[error("Invalid amount for {ticker}: {value}")]
    InvalidAmount {
        /// Ticker of the holding.
        ticker: String,
        /// The rejected amount.
        value: f64,
    },

    /// Exposure weight outside the 0-100 percent range.
    #[error("Invalid weight for {ticker} in {area}: {value}")]
    InvalidWeight {
        /// Ticker of the fund.
        ticker: String,
        /// Country or zone code carrying the weight.
        area: String,
        /// The rejected weight.
        value: f64,
    },

    /// Fund fee is negative or not finite.
    #[error("Invalid fee for {ticker}: {value}")]
    InvalidFee {
        /// Ticker of the fund.
        ticker: String,
        /// The rejected fee.
        value: f64,
    },

    /// The same ticker appears twice in an exposure table.
    #[error("Duplicate fund in exposure table: {ticker}")]
    DuplicateFund {
        /// The repeated ticker.
        ticker: String,
    },

    /// Empty or otherwise unusable identifier.
    #[error("Invalid {kind}: '{value}'")]
    InvalidIdentifier {
        /// What kind of identifier was being parsed.
        kind: &'static str,
        /// The rejected text.
        value: String,
    },
}

impl ExposureError {
    /// Creates an unknown fund error.
    #[must_use]
    pub fn unknown_fund(ticker: impl Into<String>) -> Self {
        Self::UnknownFund {
            ticker: ticker.into(),
        }
    }

    /// Creates an unknown ticker error.
    #[must_use]
    pub fn unknown_ticker(ticker: impl Into<String>) -> Self {
        Self::UnknownTicker {
            ticker: ticker.into(),
        }
    }

    /// Creates an unknown zone error.
    #[must_use]
    pub fn unknown_zone(zone: impl Into<String>) -> Self {
        Self::UnknownZone { zone: zone.into() }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(ticker: impl Into<String>, value: f64) -> Self {
        Self::InvalidAmount {
            ticker: ticker.into(),
            value,
        }
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(ticker: impl Into<String>, area: impl Into<String>, value: f64) -> Self {
        Self::InvalidWeight {
            ticker: ticker.into(),
            area: area.into(),
            value,
        }
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }
}
