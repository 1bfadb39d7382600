//! Fund exposure records and the exposure table.

use serde::{Deserialize, Serialize};

use super::{AreaCode, AssetClass, OrderedMap, Ticker};
use crate::error::{ExposureError, ExposureResult};

/// Percentage weights of a fund across areas (0-100 each).
pub type Weights = OrderedMap<AreaCode, f64>;

/// Static exposure profile of one fund.
///
/// Weights are percentages of the fund's value. They do not have to sum to
/// 100: cash and unmapped residuals are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundExposure {
    /// Fund ticker.
    pub ticker: Ticker,

    /// Optional long name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Asset class of the whole fund.
    pub asset_class: AssetClass,

    /// Ongoing charge in percent per year.
    #[serde(alias = "fee")]
    pub fee_percent: f64,

    /// Country weights in percent.
    #[serde(default)]
    pub countries: Weights,

    /// Zone weights in percent.
    #[serde(default)]
    pub zones: Weights,
}

impl FundExposure {
    /// Creates a record with no area weights.
    #[must_use]
    pub fn new(ticker: impl Into<Ticker>, asset_class: AssetClass, fee_percent: f64) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            asset_class,
            fee_percent,
            countries: Weights::new(),
            zones: Weights::new(),
        }
    }

    /// Sets the long name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a country weight in percent.
    #[must_use]
    pub fn with_country(mut self, code: impl Into<AreaCode>, percent: f64) -> Self {
        self.countries.insert(code.into(), percent);
        self
    }

    /// Adds a zone weight in percent.
    #[must_use]
    pub fn with_zone(mut self, code: impl Into<AreaCode>, percent: f64) -> Self {
        self.zones.insert(code.into(), percent);
        self
    }

    /// Sum of country weights in percent.
    #[must_use]
    pub fn country_coverage(&self) -> f64 {
        self.countries.values().sum()
    }

    /// Sum of zone weights in percent.
    #[must_use]
    pub fn zone_coverage(&self) -> f64 {
        self.zones.values().sum()
    }

    /// Checks the fee and every weight.
    ///
    /// Weights must be finite and within 0-100; the fee must be finite and
    /// non-negative.
    pub fn validate(&self) -> ExposureResult<()> {
        if self.ticker.is_empty() {
            return Err(ExposureError::invalid_identifier("ticker", ""));
        }
        if !self.fee_percent.is_finite() || self.fee_percent < 0.0 {
            return Err(ExposureError::InvalidFee {
                ticker: self.ticker.to_string(),
                value: self.fee_percent,
            });
        }
        for (area, &weight) in self.countries.iter().chain(self.zones.iter()) {
            if !weight.is_finite() || !(0.0..=100.0).contains(&weight) {
                return Err(ExposureError::invalid_weight(
                    self.ticker.as_str(),
                    area.as_str(),
                    weight,
                ));
            }
        }
        Ok(())
    }
}

/// Read-only lookup of fund exposure records by ticker.
///
/// Serialized as a list of records; tickers must be unique and every record
/// must pass [`FundExposure::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FundExposure>", into = "Vec<FundExposure>")]
pub struct ExposureTable {
    funds: OrderedMap<Ticker, FundExposure>,
}

impl ExposureTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from validated records.
    pub fn from_funds(funds: impl IntoIterator<Item = FundExposure>) -> ExposureResult<Self> {
        let mut table = Self::new();
        for fund in funds {
            table.insert(fund)?;
        }
        Ok(table)
    }

    /// Adds a record after validating it. Duplicate tickers are rejected.
    pub fn insert(&mut self, fund: FundExposure) -> ExposureResult<()> {
        fund.validate()?;
        if self.funds.contains_key(&fund.ticker) {
            return Err(ExposureError::DuplicateFund {
                ticker: fund.ticker.to_string(),
            });
        }
        self.funds.insert(fund.ticker.clone(), fund);
        Ok(())
    }

    /// Returns the record for `ticker`.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> Option<&FundExposure> {
        self.funds.get(ticker)
    }

    /// Returns the record for `ticker` or an unknown fund error.
    pub fn require(&self, ticker: &Ticker) -> ExposureResult<&FundExposure> {
        self.get(ticker)
            .ok_or_else(|| ExposureError::unknown_fund(ticker.as_str()))
    }

    /// True if the table has a record for `ticker`.
    #[must_use]
    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.funds.contains_key(ticker)
    }

    /// Number of funds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// True if the table holds no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Iterates tickers in load order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.funds.keys()
    }

    /// Iterates records in load order.
    pub fn funds(&self) -> impl Iterator<Item = &FundExposure> {
        self.funds.values()
    }
}

impl TryFrom<Vec<FundExposure>> for ExposureTable {
    type Error = ExposureError;

    fn try_from(funds: Vec<FundExposure>) -> Result<Self, Self::Error> {
        Self::from_funds(funds)
    }
}

impl From<ExposureTable> for Vec<FundExposure> {
    fn from(table: ExposureTable) -> Self {
        table.funds.into_iter().map(|(_, f)| f).collect()
    }
}
