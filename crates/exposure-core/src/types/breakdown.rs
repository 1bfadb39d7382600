//! Area breakdowns: area → asset class → amount.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AreaCode, AssetClass, OrderedMap};

/// Amounts per asset class, ordered by class name.
pub type AssetAmounts = BTreeMap<AssetClass, f64>;

/// Amounts per area and asset class.
///
/// Areas keep insertion order. The per-area sum is derived on demand with
/// [`Breakdown::area_sum`] and is never stored among the asset-class amounts,
/// so iterating an area only ever yields real asset classes.
///
/// # Examples
///
/// ```
/// use exposure_core::{AssetClass, Breakdown};
///
/// let mut b = Breakdown::new();
/// b.add("USA", AssetClass::Stock, 60.0);
/// b.add("USA", AssetClass::Bond, 5.0);
/// b.add("GBR", AssetClass::Stock, 40.0);
///
/// assert_eq!(b.area_sum("USA"), 65.0);
/// assert_eq!(b.grand_total(), 105.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    areas: OrderedMap<AreaCode, AssetAmounts>,
}

impl Breakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// True if there are no areas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Adds `amount` to `area`/`class`, creating either as needed.
    pub fn add(&mut self, area: impl Into<AreaCode>, class: AssetClass, amount: f64) {
        *self
            .areas
            .get_or_insert_with(area.into(), AssetAmounts::new)
            .entry(class)
            .or_insert(0.0) += amount;
    }

    /// Sets the amounts of `area`, replacing any existing entry in place.
    pub fn insert(&mut self, area: impl Into<AreaCode>, amounts: AssetAmounts) {
        self.areas.insert(area.into(), amounts);
    }

    /// Amounts for `area`.
    #[must_use]
    pub fn get(&self, area: &str) -> Option<&AssetAmounts> {
        self.areas.get(area)
    }

    /// Amount for `area`/`class`, zero if either is absent.
    #[must_use]
    pub fn amount(&self, area: &str, class: &AssetClass) -> f64 {
        self.get(area)
            .and_then(|a| a.get(class))
            .copied()
            .unwrap_or(0.0)
    }

    /// True if `area` is present.
    #[must_use]
    pub fn contains(&self, area: &str) -> bool {
        self.areas.contains_key(area)
    }

    /// Sum of all asset-class amounts in `area`, zero if absent.
    #[must_use]
    pub fn area_sum(&self, area: &str) -> f64 {
        self.get(area).map_or(0.0, |a| a.values().sum())
    }

    /// Sum over every area and asset class.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.areas.values().flat_map(|a| a.values()).sum()
    }

    /// Totals per asset class across all areas.
    #[must_use]
    pub fn asset_totals(&self) -> AssetAmounts {
        let mut totals = AssetAmounts::new();
        for amounts in self.areas.values() {
            for (class, &amount) in amounts {
                *totals.entry(class.clone()).or_insert(0.0) += amount;
            }
        }
        totals
    }

    /// Iterates `(area, amounts)` in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&AreaCode, &AssetAmounts)> {
        self.areas.iter()
    }

    /// Iterates area codes in insertion order.
    pub fn areas(&self) -> impl Iterator<Item = &AreaCode> {
        self.areas.keys()
    }

    /// Iterates `(area, area sum)` in insertion order.
    pub fn area_sums(&self) -> impl Iterator<Item = (&AreaCode, f64)> {
        self.areas.iter().map(|(k, a)| (k, a.values().sum()))
    }

    /// New breakdown with only the listed areas, in the order given.
    ///
    /// Codes not present are skipped; repeated codes appear once.
    #[must_use]
    pub fn select<'a, I>(&self, codes: I) -> Self
    where
        I: IntoIterator<Item = &'a AreaCode>,
    {
        let mut out = Self::new();
        for code in codes {
            if let Some(amounts) = self.areas.get(code) {
                out.areas.insert(code.clone(), amounts.clone());
            }
        }
        out
    }

    /// New breakdown with every leaf passed through `f`.
    #[must_use]
    pub fn map_amounts<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            areas: self
                .areas
                .iter()
                .map(|(area, amounts)| {
                    let mapped = amounts.iter().map(|(c, &v)| (c.clone(), f(v))).collect();
                    (area.clone(), mapped)
                })
                .collect(),
        }
    }
}

impl FromIterator<(AreaCode, AssetAmounts)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (AreaCode, AssetAmounts)>>(iter: I) -> Self {
        Self {
            areas: iter.into_iter().collect(),
        }
    }
}
