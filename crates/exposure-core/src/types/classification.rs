//! Asset classes, area kinds and display modes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ExposureError;

// =============================================================================
// ASSET CLASS
// =============================================================================

/// Broad asset class of a fund.
///
/// Known classes have their own variants; anything else is kept as
/// [`AssetClass::Other`] with its lower-cased name. Equality, hashing and
/// ordering all go through [`AssetClass::as_str`], so ordering is plain
/// lexicographic order of the class names.
///
/// # Examples
///
/// ```
/// use exposure_core::AssetClass;
///
/// assert_eq!("Stock".parse::<AssetClass>().unwrap(), AssetClass::Stock);
/// assert_eq!("reit".parse::<AssetClass>().unwrap().as_str(), "reit");
/// assert!(AssetClass::Bond < AssetClass::Stock);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssetClass {
    /// Fixed income.
    Bond,
    /// Equity.
    Stock,
    /// Physical gold and gold trackers.
    Gold,
    /// Cash and money-market.
    Cash,
    /// Real estate.
    Property,
    /// Broad commodities other than gold.
    Commodity,
    /// Any other class, by lower-cased name.
    Other(String),
}

impl AssetClass {
    /// Returns the canonical lower-case name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bond => "bond",
            Self::Stock => "stock",
            Self::Gold => "gold",
            Self::Cash => "cash",
            Self::Property => "property",
            Self::Commodity => "commodity",
            Self::Other(name) => name,
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for AssetClass {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Ok(match name.as_str() {
            "" => return Err(ExposureError::invalid_identifier("asset class", s)),
            "bond" | "bonds" => Self::Bond,
            "stock" | "stocks" | "equity" => Self::Stock,
            "gold" => Self::Gold,
            "cash" => Self::Cash,
            "property" => Self::Property,
            "commodity" | "commodities" => Self::Commodity,
            _ => Self::Other(name),
        })
    }
}

impl TryFrom<String> for AssetClass {
    type Error = ExposureError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AssetClass> for String {
    fn from(a: AssetClass) -> Self {
        a.as_str().to_string()
    }
}

impl PartialEq for AssetClass {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AssetClass {}

impl Hash for AssetClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for AssetClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AssetClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// AREA KIND
// =============================================================================

/// Grouping dimension of a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    /// Individual countries.
    Country,
    /// Regional zones grouping several countries.
    Zone,
}

impl AreaKind {
    /// Singular lower-case label, used as the area field name in chart data.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Zone => "zone",
        }
    }

    /// Plural chart title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Country => "Countries",
            Self::Zone => "Zones",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// DISPLAY MODE
// =============================================================================

/// Whether charts show absolute amounts or percentages of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Absolute amounts in the portfolio's units.
    #[default]
    Amount,
    /// Percent of the grand total.
    Percent,
}

impl DisplayMode {
    /// Suffix appended to formatted values.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Amount => "",
            Self::Percent => "%",
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Percent => "percent",
        }
    }

    /// Parses a mode name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "amount" | "byamt" => Some(Self::Amount),
            "percent" | "bypercent" | "%" => Some(Self::Percent),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
