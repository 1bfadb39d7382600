//! Stacked-bar segments.

use exposure_core::{AreaCode, AssetClass, Breakdown};
use serde::{Deserialize, Serialize};

/// One asset-class block of a stacked bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Country or zone of the bar.
    pub area: AreaCode,
    /// Asset class of the block.
    pub asset_class: AssetClass,
    /// Lower edge.
    pub start: f64,
    /// Upper edge.
    pub end: f64,
}

impl Segment {
    /// Height of the block.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.end - self.start
    }

    /// Key identifying the block across redraws, e.g. `USA-stock`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.area, self.asset_class)
    }
}

/// Flattens a breakdown into stacked-bar segments.
///
/// Areas come out in breakdown order. Within an area, asset classes are
/// stacked in descending name order starting from zero, each segment
/// starting where the previous one ended. Works the same for countries and
/// zones.
#[must_use]
pub fn flatten(breakdown: &Breakdown) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (area, amounts) in breakdown.iter() {
        let mut offset = 0.0;
        for (class, &amount) in amounts.iter().rev() {
            segments.push(Segment {
                area: area.clone(),
                asset_class: class.clone(),
                start: offset,
                end: offset + amount,
            });
            offset += amount;
        }
    }
    segments
}
