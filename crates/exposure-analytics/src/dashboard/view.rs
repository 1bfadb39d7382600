//! Chart-ready views of a distribution.

use exposure_core::{AreaCode, AreaKind, Breakdown, DisplayMode, OrderedMap};
use serde::{Deserialize, Serialize};

use crate::aggregation::{reduce_to_top_n, Distribution};
use crate::format::{apply_mode, asset_slices, flatten, profiles, AreaProfile, AssetSlice, Segment};
use crate::types::{LabelTable, ViewSettings};

/// Data for one stacked-bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    /// Countries or zones.
    pub kind: AreaKind,

    /// Chart title.
    pub title: String,

    /// Mode of `breakdown` and `segments`.
    pub mode: DisplayMode,

    /// Reduced breakdown in display units; its areas are the x-axis.
    pub breakdown: Breakdown,

    /// Stacked-bar segments of `breakdown`.
    pub segments: Vec<Segment>,

    /// Tooltip lines per area, both modes.
    pub profiles: OrderedMap<AreaCode, AreaProfile>,
}

impl ChartView {
    /// Builds a chart from an amount breakdown.
    ///
    /// The breakdown is reduced to the top N for `kind` (if a limit is set),
    /// converted to the display mode and flattened. Profiles are computed
    /// from the reduced amounts.
    #[must_use]
    pub fn build(
        kind: AreaKind,
        title: impl Into<String>,
        amounts: &Breakdown,
        labels: &LabelTable,
        settings: &ViewSettings,
    ) -> Self {
        let reduced = match settings.top_n(kind) {
            Some(n) => reduce_to_top_n(amounts, n),
            None => amounts.clone(),
        };
        let breakdown = apply_mode(&reduced, settings.mode);

        Self {
            kind,
            title: title.into(),
            mode: settings.mode,
            segments: flatten(&breakdown),
            profiles: profiles(&reduced, labels, settings),
            breakdown,
        }
    }

    /// Area codes in chart order.
    pub fn areas(&self) -> impl Iterator<Item = &AreaCode> {
        self.breakdown.areas()
    }

    /// Height of the tallest bar, zero for an empty chart.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.breakdown
            .area_sums()
            .map(|(_, sum)| sum)
            .fold(0.0, f64::max)
    }

    /// Tooltip lines for `area` in the chart's mode.
    #[must_use]
    pub fn profile(&self, area: &str) -> Option<&[String]> {
        self.profiles.get(area).map(|p| p.lines(self.mode))
    }

    /// True if the chart has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

/// Everything the renderer needs for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Display mode of every chart.
    pub mode: DisplayMode,

    /// Country chart.
    pub countries: ChartView,

    /// Zone chart.
    pub zones: ChartView,

    /// Asset-class pie.
    pub assets: Vec<AssetSlice>,

    /// Value-weighted fee, in percent.
    pub fee_percent: f64,

    /// Portfolio total.
    pub total: f64,
}

impl DashboardView {
    /// Builds all charts for a distribution.
    #[must_use]
    pub fn build(dist: &Distribution, labels: &LabelTable, settings: &ViewSettings) -> Self {
        let chart = |kind: AreaKind| {
            ChartView::build(kind, kind.title(), dist.breakdown(kind), labels, settings)
        };

        Self {
            mode: settings.mode,
            countries: chart(AreaKind::Country),
            zones: chart(AreaKind::Zone),
            assets: asset_slices(&dist.assets, settings.mode),
            fee_percent: dist.fee_percent,
            total: dist.total,
        }
    }

    /// Chart for the given area kind.
    #[must_use]
    pub fn chart(&self, kind: AreaKind) -> &ChartView {
        match kind {
            AreaKind::Country => &self.countries,
            AreaKind::Zone => &self.zones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exposure_core::AssetClass;

    fn distribution() -> Distribution {
        let mut dist = Distribution {
            total: 100.0,
            fee_percent: 0.2,
            ..Default::default()
        };
        for (code, amount) in [("USA", 50.0), ("GBR", 30.0), ("FRA", 15.0), ("JPN", 5.0)] {
            dist.countries.add(code, AssetClass::Stock, amount);
        }
        dist.zones.add("na", AssetClass::Stock, 50.0);
        dist.zones.add("eu", AssetClass::Stock, 45.0);
        dist.zones.add("as", AssetClass::Stock, 5.0);
        dist.assets.insert(AssetClass::Stock, 100.0);
        dist
    }

    #[test]
    fn test_country_chart_is_reduced() {
        let settings = ViewSettings::new().with_top_countries(2);
        let view = DashboardView::build(&distribution(), &LabelTable::standard(), &settings);

        let areas: Vec<_> = view.countries.areas().map(AreaCode::as_str).collect();
        assert_eq!(areas, vec!["USA", "GBR", "other"]);
        assert_eq!(view.countries.title, "Countries");
        assert_eq!(view.countries.max_height(), 50.0);
        assert_eq!(view.countries.segments.len(), 3);
    }

    #[test]
    fn test_zones_untruncated_by_default() {
        let settings = ViewSettings::new().with_top_countries(1);
        let view = DashboardView::build(&distribution(), &LabelTable::standard(), &settings);
        assert_eq!(view.zones.breakdown.len(), 3);
        assert_eq!(view.zones.title, "Zones");
    }

    #[test]
    fn test_percent_mode() {
        let mut dist = distribution();
        dist.countries = dist.countries.map_amounts(|v| v * 2.0);
        let settings = ViewSettings::new().with_mode(DisplayMode::Percent);
        let view = DashboardView::build(&dist, &LabelTable::standard(), &settings);

        assert_relative_eq!(view.countries.breakdown.area_sum("USA"), 50.0);
        assert_relative_eq!(view.assets[0].value, 100.0);
        assert_eq!(view.countries.profile("USA").unwrap()[0], "USA 50.0%");
        assert_eq!(view.total, 100.0);
    }

    #[test]
    fn test_profiles_use_reduced_areas() {
        let settings = ViewSettings::new().with_top_countries(1);
        let view = DashboardView::build(&distribution(), &LabelTable::standard(), &settings);
        assert_eq!(view.countries.profile("other").unwrap()[0], "Other 50.0");
        assert!(view.countries.profile("GBR").is_none());
    }

    #[test]
    fn test_empty_distribution() {
        let view = DashboardView::build(
            &Distribution::default(),
            &LabelTable::standard(),
            &ViewSettings::new().with_mode(DisplayMode::Percent),
        );
        assert!(view.countries.is_empty());
        assert!(view.zones.segments.is_empty());
        assert!(view.assets.is_empty());
        assert_eq!(view.countries.max_height(), 0.0);
    }
}
