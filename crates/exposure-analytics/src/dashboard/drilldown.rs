//! Zone drill-down.

use exposure_core::{AreaCode, AreaKind, AssetAmounts, ExposureResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::view::ChartView;
use crate::aggregation::Distribution;
use crate::format::{asset_slices, AssetSlice};
use crate::types::{LabelTable, ViewSettings, ZoneDirectory};

/// Country chart restricted to one zone, plus the zone's asset pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDown {
    /// Zone code as listed in the directory.
    pub zone: AreaCode,

    /// Countries of the zone held by the portfolio, titled `"<zone> zone"`.
    pub countries: ChartView,

    /// Asset-class totals of the zone.
    pub assets: Vec<AssetSlice>,
}

/// Restricts the country breakdown to the members of `zone`.
///
/// Members are matched against country codes verbatim first, then
/// upper-cased; members the portfolio has no exposure to are skipped. The
/// filtered breakdown goes through the usual top-N and mode conversion. The
/// pie shows the zone's own asset-class amounts from the zone breakdown.
///
/// # Errors
///
/// Returns [`exposure_core::ExposureError::UnknownZone`] if `zone` is not in
/// the directory.
pub fn drill_down(
    dist: &Distribution,
    zones: &ZoneDirectory,
    zone: &str,
    labels: &LabelTable,
    settings: &ViewSettings,
) -> ExposureResult<DrillDown> {
    let (code, entry) = zones.require(zone)?;

    let mut members = Vec::with_capacity(entry.members.len());
    for member in &entry.members {
        let matched = if dist.countries.contains(member.as_str()) {
            Some(member.clone())
        } else {
            let upper = member.to_upper();
            dist.countries.contains(upper.as_str()).then_some(upper)
        };
        match matched {
            Some(country) => members.push(country),
            None => debug!(zone = %code, country = %member, "zone member not held, skipping"),
        }
    }

    let name = if entry.name.is_empty() {
        labels.display_name(code.as_str())
    } else {
        entry.name.as_str()
    };

    let countries = ChartView::build(
        AreaKind::Country,
        format!("{name} zone"),
        &dist.countries.select(&members),
        labels,
        settings,
    );

    let zone_assets: AssetAmounts = dist
        .zones
        .iter()
        .find(|(area, _)| area.as_str().eq_ignore_ascii_case(code.as_str()))
        .map(|(_, amounts)| amounts.clone())
        .unwrap_or_default();

    debug!(zone = %code, countries = members.len(), "drilled down");

    Ok(DrillDown {
        zone: code.clone(),
        countries,
        assets: asset_slices(&zone_assets, settings.mode),
    })
}
