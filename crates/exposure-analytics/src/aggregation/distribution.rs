//! Portfolio distribution across countries, zones and asset classes.

use exposure_core::{
    AreaKind, AssetAmounts, Breakdown, ExposureResult, ExposureTable, Portfolio,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregate exposure of a portfolio.
///
/// Every amount is in the portfolio's own units. When the fund weights of
/// each holding form a full 100% partition, the country, zone and asset
/// totals all equal [`Distribution::total`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// Amounts by country and asset class.
    pub countries: Breakdown,

    /// Amounts by zone and asset class.
    pub zones: Breakdown,

    /// Amounts by asset class.
    pub assets: AssetAmounts,

    /// Value-weighted average fund fee, in percent.
    pub fee_percent: f64,

    /// Sum of all holdings.
    pub total: f64,
}

impl Distribution {
    /// Returns the breakdown for the given area kind.
    #[must_use]
    pub fn breakdown(&self, kind: AreaKind) -> &Breakdown {
        match kind {
            AreaKind::Country => &self.countries,
            AreaKind::Zone => &self.zones,
        }
    }

    /// True if nothing was aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0.0
    }
}

/// Folds a portfolio through the exposure table.
///
/// For each holding the amount is credited to the fund's asset class, and
/// `weight / 100 * amount` is credited to every country and zone the fund is
/// exposed to. Weights not covering 100% leave the remainder unmapped.
///
/// A zero-total portfolio yields the empty distribution (no areas, zero fee).
///
/// # Errors
///
/// Returns [`exposure_core::ExposureError::UnknownFund`] if a holding's
/// ticker is missing from `table`.
///
/// # Example
///
/// ```rust
/// use exposure_analytics::aggregate;
/// use exposure_core::{AssetClass, ExposureTable, FundExposure, Portfolio};
///
/// let table = ExposureTable::from_funds([FundExposure::new("FUND_A", AssetClass::Stock, 0.1)
///     .with_country("USA", 60.0)
///     .with_country("GBR", 40.0)])
/// .unwrap();
/// let portfolio = Portfolio::from_pairs([("FUND_A", 100.0)]).unwrap();
///
/// let dist = aggregate(&portfolio, &table).unwrap();
/// assert_eq!(dist.countries.area_sum("USA"), 60.0);
/// assert_eq!(dist.assets[&AssetClass::Stock], 100.0);
/// ```
pub fn aggregate(portfolio: &Portfolio, table: &ExposureTable) -> ExposureResult<Distribution> {
    let funds = portfolio
        .iter()
        .map(|(ticker, amount)| table.require(ticker).map(|fund| (fund, amount)))
        .collect::<ExposureResult<Vec<_>>>()?;

    let total = portfolio.total();
    if total == 0.0 {
        debug!(holdings = portfolio.len(), "zero portfolio total, empty distribution");
        return Ok(Distribution::default());
    }

    let mut dist = Distribution {
        total,
        ..Default::default()
    };

    for (fund, amount) in funds {
        let class = &fund.asset_class;
        *dist.assets.entry(class.clone()).or_insert(0.0) += amount;
        dist.fee_percent += fund.fee_percent * amount / total;

        for (zone, &weight) in fund.zones.iter() {
            dist.zones.add(zone.clone(), class.clone(), weight / 100.0 * amount);
        }
        for (country, &weight) in fund.countries.iter() {
            dist.countries
                .add(country.clone(), class.clone(), weight / 100.0 * amount);
        }
    }

    debug!(
        total,
        countries = dist.countries.len(),
        zones = dist.zones.len(),
        fee = dist.fee_percent,
        "aggregated portfolio"
    );

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exposure_core::{AssetClass, ExposureError, FundExposure};

    fn test_table() -> ExposureTable {
        ExposureTable::from_funds([
            FundExposure::new("XFAS", AssetClass::Bond, 0.05)
                .with_country("USA", 76.0)
                .with_country("GBR", 20.0)
                .with_country("FRA", 3.0)
                .with_country("NDL", 1.0)
                .with_zone("NA", 76.0)
                .with_zone("UK", 20.0)
                .with_zone("EU", 4.0),
            FundExposure::new("XFAB", AssetClass::Stock, 0.03)
                .with_country("USA", 76.0)
                .with_country("GBR", 20.0)
                .with_country("FRA", 3.0)
                .with_country("NDL", 1.0)
                .with_zone("NA", 76.0)
                .with_zone("UK", 20.0)
                .with_zone("EU", 4.0),
            FundExposure::new("XFAG", AssetClass::Gold, 0.07)
                .with_country("NoN", 100.0)
                .with_zone("nn", 100.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_fund() {
        let table = ExposureTable::from_funds([FundExposure::new("FUND_A", AssetClass::Stock, 0.2)
            .with_country("USA", 60.0)
            .with_country("GBR", 40.0)])
        .unwrap();
        let portfolio = Portfolio::from_pairs([("FUND_A", 100.0)]).unwrap();

        let dist = aggregate(&portfolio, &table).unwrap();

        assert_eq!(dist.countries.amount("USA", &AssetClass::Stock), 60.0);
        assert_eq!(dist.countries.amount("GBR", &AssetClass::Stock), 40.0);
        assert_eq!(dist.countries.len(), 2);
        assert_eq!(dist.assets.len(), 1);
        assert_eq!(dist.assets[&AssetClass::Stock], 100.0);
        assert_relative_eq!(dist.fee_percent, 0.2);
        assert!(dist.zones.is_empty());
    }

    #[test]
    fn test_partition_sums_match_total() {
        let portfolio =
            Portfolio::from_pairs([("XFAS", 5.0), ("XFAB", 1.0), ("XFAG", 1.0)]).unwrap();
        let dist = aggregate(&portfolio, &test_table()).unwrap();

        assert_relative_eq!(dist.total, 7.0);
        assert_relative_eq!(dist.countries.grand_total(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(dist.zones.grand_total(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(dist.assets.values().sum::<f64>(), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_order_follows_holdings() {
        let portfolio = Portfolio::from_pairs([("XFAG", 1.0), ("XFAS", 1.0)]).unwrap();
        let dist = aggregate(&portfolio, &test_table()).unwrap();

        let countries: Vec<_> = dist.countries.areas().map(|a| a.as_str()).collect();
        assert_eq!(countries, vec!["NoN", "USA", "GBR", "FRA", "NDL"]);
    }

    #[test]
    fn test_mixed_asset_classes_in_area() {
        let portfolio = Portfolio::from_pairs([("XFAS", 5.0), ("XFAB", 1.0)]).unwrap();
        let dist = aggregate(&portfolio, &test_table()).unwrap();

        assert_relative_eq!(dist.countries.amount("USA", &AssetClass::Bond), 3.8);
        assert_relative_eq!(dist.countries.amount("USA", &AssetClass::Stock), 0.76);
        assert_relative_eq!(dist.zones.area_sum("EU"), 0.24, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_fee() {
        let portfolio = Portfolio::from_pairs([("XFAS", 1.0), ("XFAG", 1.0)]).unwrap();
        let dist = aggregate(&portfolio, &test_table()).unwrap();
        assert_relative_eq!(dist.fee_percent, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_fund() {
        let portfolio = Portfolio::from_pairs([("NOPE", 1.0)]).unwrap();
        let result = aggregate(&portfolio, &test_table());
        assert!(matches!(result, Err(ExposureError::UnknownFund { .. })));
    }

    #[test]
    fn test_zero_total_is_empty() {
        let portfolio = Portfolio::from_pairs([("XFAS", 0.0)]).unwrap();
        let dist = aggregate(&portfolio, &test_table()).unwrap();
        assert!(dist.is_empty());
        assert!(dist.countries.is_empty());
        assert_eq!(dist.fee_percent, 0.0);
        assert!(!dist.fee_percent.is_nan());

        let empty = aggregate(&Portfolio::new(), &test_table()).unwrap();
        assert_eq!(empty, Distribution::default());
    }
}
