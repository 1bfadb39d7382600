//! Settings for building dashboard views.

use exposure_core::{AreaKind, DisplayMode};
use serde::{Deserialize, Serialize};

/// Default number of countries kept before folding the rest into "other".
pub const DEFAULT_TOP_COUNTRIES: usize = 14;

/// Default minimum value for an asset class to appear in a profile.
pub const DEFAULT_PROFILE_THRESHOLD: f64 = 0.05;

/// Default number of decimals in profile lines.
pub const DEFAULT_PRECISION: usize = 1;

/// Parameters controlling how a distribution is turned into charts.
///
/// Zones are left untruncated unless `top_zones` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Number of countries kept by the top-N reducer.
    pub top_countries: usize,

    /// Number of zones kept by the top-N reducer, if any.
    pub top_zones: Option<usize>,

    /// Whether charts show amounts or percentages.
    pub mode: DisplayMode,

    /// Asset classes at or below this value are left out of profiles.
    pub profile_threshold: f64,

    /// Decimals used when formatting profile values.
    pub precision: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            top_countries: DEFAULT_TOP_COUNTRIES,
            top_zones: None,
            mode: DisplayMode::Amount,
            profile_threshold: DEFAULT_PROFILE_THRESHOLD,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ViewSettings {
    /// Creates settings with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of countries kept.
    #[must_use]
    pub fn with_top_countries(mut self, n: usize) -> Self {
        self.top_countries = n;
        self
    }

    /// Sets the number of zones kept.
    #[must_use]
    pub fn with_top_zones(mut self, n: Option<usize>) -> Self {
        self.top_zones = n;
        self
    }

    /// Sets the display mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the profile threshold.
    #[must_use]
    pub fn with_profile_threshold(mut self, threshold: f64) -> Self {
        self.profile_threshold = threshold;
        self
    }

    /// Sets the profile precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Top-N limit for the given area kind, `None` meaning no truncation.
    #[must_use]
    pub fn top_n(&self, kind: AreaKind) -> Option<usize> {
        match kind {
            AreaKind::Country => Some(self.top_countries),
            AreaKind::Zone => self.top_zones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let settings = ViewSettings::default();
        assert_eq!(settings.top_countries, 14);
        assert!(settings.top_zones.is_none());
        assert_eq!(settings.mode, DisplayMode::Amount);
        assert_eq!(settings.profile_threshold, 0.05);
        assert_eq!(settings.precision, 1);
    }

    #[test]
    fn test_builder_pattern() {
        let settings = ViewSettings::new()
            .with_top_countries(8)
            .with_top_zones(Some(5))
            .with_mode(DisplayMode::Percent)
            .with_precision(2);

        assert_eq!(settings.top_n(AreaKind::Country), Some(8));
        assert_eq!(settings.top_n(AreaKind::Zone), Some(5));
        assert_eq!(settings.mode, DisplayMode::Percent);
        assert_eq!(settings.precision, 2);
    }

    #[test]
    fn test_serde_fills_defaults() {
        let parsed: ViewSettings = serde_json::from_str(r#"{"mode": "percent"}"#).unwrap();
        assert_eq!(parsed.mode, DisplayMode::Percent);
        assert_eq!(parsed.top_countries, 14);
    }
}
