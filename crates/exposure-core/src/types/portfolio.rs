//! Portfolio snapshot and builder.

use serde::{Deserialize, Serialize};

use super::{ExposureTable, OrderedMap, Ticker};
use crate::error::{ExposureError, ExposureResult};

/// An immutable snapshot of fund holdings.
///
/// Maps ticker to amount held. Amounts are finite and non-negative; tickers are
/// unique and kept in entry order. A new snapshot is built for every edit of
/// the holdings; nothing in the pipeline mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderedMap<Ticker, f64>", into = "OrderedMap<Ticker, f64>")]
pub struct Portfolio {
    holdings: OrderedMap<Ticker, f64>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio builder.
    #[must_use]
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::new()
    }

    /// Builds a portfolio from `(ticker, amount)` pairs.
    pub fn from_pairs<T, I>(pairs: I) -> ExposureResult<Self>
    where
        T: AsRef<str>,
        I: IntoIterator<Item = (T, f64)>,
    {
        pairs
            .into_iter()
            .fold(PortfolioBuilder::new(), |b, (t, a)| b.holding(t, a))
            .build()
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// True if there are no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Amount held in `ticker`, zero if absent.
    #[must_use]
    pub fn amount(&self, ticker: &Ticker) -> f64 {
        self.holdings.get(ticker).copied().unwrap_or(0.0)
    }

    /// True if `ticker` has an entry (possibly zero).
    #[must_use]
    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.holdings.contains_key(ticker)
    }

    /// Sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.holdings.values().sum()
    }

    /// Iterates `(ticker, amount)` in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, f64)> {
        self.holdings.iter().map(|(t, &a)| (t, a))
    }

    /// Iterates tickers in entry order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.holdings.keys()
    }

    /// Returns a copy rescaled so the amounts sum to `target`.
    ///
    /// A zero-total portfolio is returned unchanged.
    #[must_use]
    pub fn normalized_to(&self, target: f64) -> Self {
        let total = self.total();
        if total == 0.0 {
            return self.clone();
        }
        let divisor = total / target;
        Self {
            holdings: self
                .holdings
                .iter()
                .map(|(t, &a)| (t.clone(), a / divisor))
                .collect(),
        }
    }

    /// Splits off holdings whose ticker is missing from `table`.
    ///
    /// Returns the portfolio of known funds and the dropped tickers, in entry
    /// order.
    #[must_use]
    pub fn partition_known(&self, table: &ExposureTable) -> (Self, Vec<Ticker>) {
        let mut known = OrderedMap::with_capacity(self.holdings.len());
        let mut unknown = Vec::new();
        for (ticker, &amount) in self.holdings.iter() {
            if table.contains(ticker) {
                known.insert(ticker.clone(), amount);
            } else {
                unknown.push(ticker.clone());
            }
        }
        (Self { holdings: known }, unknown)
    }
}

impl TryFrom<OrderedMap<Ticker, f64>> for Portfolio {
    type Error = ExposureError;

    fn try_from(holdings: OrderedMap<Ticker, f64>) -> Result<Self, Self::Error> {
        PortfolioBuilder::new()
            .holdings(holdings.iter().map(|(t, &a)| (t.as_str(), a)))
            .build()
    }
}

impl From<Portfolio> for OrderedMap<Ticker, f64> {
    fn from(p: Portfolio) -> Self {
        p.holdings
    }
}

/// Builder for constructing a [`Portfolio`].
///
/// Repeated tickers accumulate into one holding.
///
/// # Example
///
/// ```rust
/// use exposure_core::Portfolio;
///
/// let portfolio = Portfolio::builder()
///     .holding("VFEM", 11.08)
///     .holding("AGBP", 27.81)
///     .holding("vfem", 1.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    holdings: OrderedMap<Ticker, f64>,
    errors: Vec<ExposureError>,
}

impl PortfolioBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount held in `ticker`.
    #[must_use]
    pub fn holding(mut self, ticker: impl AsRef<str>, amount: f64) -> Self {
        let raw = ticker.as_ref();
        match raw.parse::<Ticker>() {
            Ok(ticker) if amount.is_finite() && amount >= 0.0 => {
                *self.holdings.get_or_insert_with(ticker, || 0.0) += amount;
            }
            Ok(ticker) => self
                .errors
                .push(ExposureError::invalid_amount(ticker.as_str(), amount)),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Adds several holdings.
    #[must_use]
    pub fn holdings<T: AsRef<str>>(self, pairs: impl IntoIterator<Item = (T, f64)>) -> Self {
        pairs.into_iter().fold(self, |b, (t, a)| b.holding(t, a))
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns the first invalid ticker or amount that was added.
    pub fn build(self) -> ExposureResult<Portfolio> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }
        Ok(Portfolio {
            holdings: self.holdings,
        })
    }
}
