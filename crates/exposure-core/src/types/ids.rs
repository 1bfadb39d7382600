//! Fund and area identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::ExposureError;

/// Fund ticker symbol.
///
/// Tickers are case-insensitive on input and stored upper-case with
/// surrounding whitespace removed, so `" vfem "` and `"VFEM"` are the same fund.
///
/// # Examples
///
/// ```
/// use exposure_core::Ticker;
///
/// let ticker = Ticker::new(" igln ");
/// assert_eq!(ticker.as_str(), "IGLN");
/// assert!("".parse::<Ticker>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Creates a normalized ticker. Does not reject empty input; use
    /// [`str::parse`] for validation.
    #[must_use]
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Self(symbol.as_ref().trim().to_uppercase())
    }

    /// Returns the ticker text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the ticker is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Ticker {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ticker = Self::new(s);
        if ticker.is_empty() {
            return Err(ExposureError::invalid_identifier("ticker", s));
        }
        Ok(ticker)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

impl Borrow<str> for Ticker {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Country or zone code used as a breakdown key.
///
/// Codes are case-sensitive and kept verbatim (`"USA"`, `"NoN"`, `"nn"`);
/// whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AreaCode(String);

impl AreaCode {
    /// Code of the synthetic bucket holding everything outside the top N.
    pub const OTHER: &'static str = "other";

    /// Creates an area code.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// The synthetic "other" area.
    #[must_use]
    pub fn other() -> Self {
        Self(Self::OTHER.to_string())
    }

    /// True for the synthetic "other" area.
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.0 == Self::OTHER
    }

    /// Returns the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased copy, used to match zone member lists against country keys.
    #[must_use]
    pub fn to_upper(&self) -> Self {
        Self(self.0.to_uppercase())
    }
}

impl From<String> for AreaCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AreaCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<AreaCode> for String {
    fn from(a: AreaCode) -> Self {
        a.0
    }
}

impl Borrow<str> for AreaCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
