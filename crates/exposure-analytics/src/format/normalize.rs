//! Percent normalization.

use exposure_core::{AssetAmounts, AssetClass, Breakdown, DisplayMode};
use serde::{Deserialize, Serialize};

/// Converts every amount to a percentage of the breakdown's grand total.
///
/// The structure (areas, asset classes, order) is unchanged. A zero grand
/// total gives all-zero leaves rather than NaN.
#[must_use]
pub fn to_percent(breakdown: &Breakdown) -> Breakdown {
    let total = breakdown.grand_total();
    if total == 0.0 {
        return breakdown.map_amounts(|_| 0.0);
    }
    let divisor = total / 100.0;
    breakdown.map_amounts(|amount| amount / divisor)
}

/// Returns `breakdown` as shown in the given mode.
#[must_use]
pub fn apply_mode(breakdown: &Breakdown, mode: DisplayMode) -> Breakdown {
    match mode {
        DisplayMode::Amount => breakdown.clone(),
        DisplayMode::Percent => to_percent(breakdown),
    }
}

/// One slice of the asset-class pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSlice {
    /// Asset class of the slice.
    pub asset_class: AssetClass,
    /// Amount or percentage, depending on mode.
    pub value: f64,
}

/// Pie slices for asset-class totals, in asset-class name order.
///
/// In percent mode each value is divided by `sum / 100`; a zero sum gives
/// zero slices.
#[must_use]
pub fn asset_slices(assets: &AssetAmounts, mode: DisplayMode) -> Vec<AssetSlice> {
    let sum: f64 = assets.values().sum();
    let scale = |value: f64| match mode {
        DisplayMode::Amount => value,
        DisplayMode::Percent if sum == 0.0 => 0.0,
        DisplayMode::Percent => value / (sum / 100.0),
    };

    assets
        .iter()
        .map(|(class, &value)| AssetSlice {
            asset_class: class.clone(),
            value: scale(value),
        })
        .collect()
}
