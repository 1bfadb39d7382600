//! Tooltip profiles for single areas.

use exposure_core::{AreaCode, Breakdown, DisplayMode, OrderedMap};
use serde::{Deserialize, Serialize};

use super::normalize::to_percent;
use crate::types::{LabelTable, ViewSettings};

/// Tooltip lines for one area in both display modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaProfile {
    /// Lines with absolute amounts.
    pub by_amount: Vec<String>,
    /// Lines with percentages of the grand total.
    pub by_percent: Vec<String>,
}

impl AreaProfile {
    /// Lines for the given mode.
    #[must_use]
    pub fn lines(&self, mode: DisplayMode) -> &[String] {
        match mode {
            DisplayMode::Amount => &self.by_amount,
            DisplayMode::Percent => &self.by_percent,
        }
    }
}

/// Formats a value with `precision` decimals and the mode's suffix.
#[must_use]
pub fn format_value(value: f64, precision: usize, mode: DisplayMode) -> String {
    format!("{:.*}{}", precision, value, mode.suffix())
}

/// Tooltip lines for `area` with the default threshold and precision.
///
/// See [`summarize_with`].
#[must_use]
pub fn summarize(
    area: &str,
    breakdown: &Breakdown,
    mode: DisplayMode,
    labels: &LabelTable,
) -> Vec<String> {
    summarize_with(area, breakdown, mode, labels, &ViewSettings::default())
}

/// Tooltip lines for `area`.
///
/// The first line is the area's display name followed by its total. Then one
/// `" - <class>: <value>"` line per asset class whose value exceeds the
/// profile threshold, in asset-class name order. An area missing from the
/// breakdown gives no lines.
///
/// # Example
///
/// ```rust
/// use exposure_analytics::{summarize, LabelTable};
/// use exposure_core::{AssetClass, Breakdown, DisplayMode};
///
/// let mut b = Breakdown::new();
/// b.add("NoN", AssetClass::Gold, 16.67);
///
/// let lines = summarize("NoN", &b, DisplayMode::Amount, &LabelTable::standard());
/// assert_eq!(lines, vec!["Not National 16.7", " - gold: 16.7"]);
/// ```
#[must_use]
pub fn summarize_with(
    area: &str,
    breakdown: &Breakdown,
    mode: DisplayMode,
    labels: &LabelTable,
    settings: &ViewSettings,
) -> Vec<String> {
    let Some(amounts) = breakdown.get(area) else {
        return Vec::new();
    };

    let fmt = |value: f64| format_value(value, settings.precision, mode);
    let total: f64 = amounts.values().sum();

    let mut lines = Vec::with_capacity(amounts.len() + 1);
    lines.push(format!("{} {}", labels.display_name(area), fmt(total)));
    lines.extend(
        amounts
            .iter()
            .filter(|(_, &value)| value > settings.profile_threshold)
            .map(|(class, &value)| format!(" - {}: {}", class, fmt(value))),
    );
    lines
}

/// Profiles for every area of an amount breakdown, keyed in breakdown order.
#[must_use]
pub fn profiles(
    amounts: &Breakdown,
    labels: &LabelTable,
    settings: &ViewSettings,
) -> OrderedMap<AreaCode, AreaProfile> {
    let percents = to_percent(amounts);
    amounts
        .areas()
        .map(|area| {
            let code = area.as_str();
            let profile = AreaProfile {
                by_amount: summarize_with(code, amounts, DisplayMode::Amount, labels, settings),
                by_percent: summarize_with(code, &percents, DisplayMode::Percent, labels, settings),
            };
            (area.clone(), profile)
        })
        .collect()
}
