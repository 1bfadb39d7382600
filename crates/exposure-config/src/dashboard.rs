//! Persistent dashboard settings.
//!
//! A [`DashboardConfig`] is the on-disk form of
//! [`ViewSettings`](exposure_analytics::ViewSettings) plus the location of the
//! reference data. It is stored as TOML; every field is optional in the file.

use exposure_analytics::types::{
    ViewSettings, DEFAULT_PRECISION, DEFAULT_PROFILE_THRESHOLD, DEFAULT_TOP_COUNTRIES,
};
use exposure_core::DisplayMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::reference::ReferenceData;

/// Largest accepted profile precision.
pub const MAX_PRECISION: usize = 6;

// =============================================================================
// DASHBOARD CONFIGURATION
// =============================================================================

/// Dashboard settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of countries kept before folding the rest into "other".
    pub top_countries: usize,

    /// Number of zones kept, no truncation when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_zones: Option<usize>,

    /// Chart display mode.
    pub mode: DisplayMode,

    /// Minimum value for an asset class to appear in a profile.
    pub profile_threshold: f64,

    /// Decimals in profile values.
    pub precision: usize,

    /// Reference data file; the built-in dataset is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_countries: DEFAULT_TOP_COUNTRIES,
            top_zones: None,
            mode: DisplayMode::Amount,
            profile_threshold: DEFAULT_PROFILE_THRESHOLD,
            precision: DEFAULT_PRECISION,
            reference: None,
        }
    }
}

impl DashboardConfig {
    /// Creates a configuration with default values.
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

    /// Sets the reference data file.
    #[must_use]
    pub fn with_reference(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference = Some(path.into());
        self
    }

    /// View settings for the analytics pipeline.
    #[must_use]
    pub fn settings(&self) -> ViewSettings {
        ViewSettings::new()
            .with_top_countries(self.top_countries)
            .with_top_zones(self.top_zones)
            .with_mode(self.mode)
            .with_profile_threshold(self.profile_threshold)
            .with_precision(self.precision)
    }

    /// Loads the configured reference data, or the built-in dataset.
    pub fn reference_data(&self) -> ConfigResult<ReferenceData> {
        ReferenceData::load_or_standard(self.reference.as_deref())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
        debug!(path = %path.display(), "loading dashboard config");
        Self::from_toml_str(&text)
    }

    /// Loads `path`, or returns the defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        match Self::load(path) {
            Err(ConfigError::NotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Writes the configuration, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        self.validate_or_error()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, &e))?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(|e| ConfigError::io(path, &e))?;
        debug!(path = %path.display(), "saved dashboard config");
        Ok(())
    }

    /// Current value of `key` as text. Unset optional values read as `"none"`.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::TopCountries => self.top_countries.to_string(),
            ConfigKey::TopZones => self
                .top_zones
                .map_or_else(|| "none".to_string(), |n| n.to_string()),
            ConfigKey::Mode => self.mode.to_string(),
            ConfigKey::ProfileThreshold => self.profile_threshold.to_string(),
            ConfigKey::Precision => self.precision.to_string(),
            ConfigKey::Reference => self
                .reference
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
        }
    }

    /// Parses `value` and assigns it to `key`.
    ///
    /// The result is validated; on error the configuration is left unchanged.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> ConfigResult<()> {
        let mut next = self.clone();
        let value = value.trim();
        match key {
            ConfigKey::TopCountries => next.top_countries = parse_field(key, value)?,
            ConfigKey::TopZones => {
                next.top_zones = if is_none(value) {
                    None
                } else {
                    Some(parse_field(key, value)?)
                }
            }
            ConfigKey::Mode => {
                next.mode = DisplayMode::parse(value).ok_or_else(|| invalid(key, value))?
            }
            ConfigKey::ProfileThreshold => next.profile_threshold = parse_field(key, value)?,
            ConfigKey::Precision => next.precision = parse_field(key, value)?,
            ConfigKey::Reference => {
                next.reference = if is_none(value) {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
        }
        next.validate_or_error()?;
        *self = next;
        Ok(())
    }

    /// Restores the default value of `key`.
    pub fn reset(&mut self, key: ConfigKey) {
        let defaults = Self::default();
        match key {
            ConfigKey::TopCountries => self.top_countries = defaults.top_countries,
            ConfigKey::TopZones => self.top_zones = defaults.top_zones,
            ConfigKey::Mode => self.mode = defaults.mode,
            ConfigKey::ProfileThreshold => self.profile_threshold = defaults.profile_threshold,
            ConfigKey::Precision => self.precision = defaults.precision,
            ConfigKey::Reference => self.reference = defaults.reference,
        }
    }
}

fn is_none(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

fn invalid(key: ConfigKey, value: &str) -> ConfigError {
    ConfigError::Validation {
        field: key.as_str().to_string(),
        message: format!("invalid value '{value}'"),
    }
}

fn parse_field<T: FromStr>(key: ConfigKey, value: &str) -> ConfigResult<T> {
    value.parse().map_err(|_| invalid(key, value))
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.top_countries == 0 {
            errors.push(ValidationError::with_rule(
                "top_countries",
                "At least one country must be kept",
                "min_top_n",
            ));
        }

        if self.top_zones == Some(0) {
            errors.push(ValidationError::with_rule(
                "top_zones",
                "At least one zone must be kept",
                "min_top_n",
            ));
        }

        if !self.profile_threshold.is_finite() || self.profile_threshold < 0.0 {
            errors.push(ValidationError::with_rule(
                "profile_threshold",
                "Profile threshold must be a non-negative number",
                "valid_threshold",
            ));
        }

        if self.precision > MAX_PRECISION {
            errors.push(ValidationError::with_rule(
                "precision",
                format!("Precision {} exceeds maximum of {MAX_PRECISION}", self.precision),
                "max_precision",
            ));
        }

        errors
    }
}

// =============================================================================
// CONFIGURATION KEYS
// =============================================================================

/// Settable configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Countries kept by the top-N reducer.
    TopCountries,
    /// Zones kept by the top-N reducer.
    TopZones,
    /// Amount or percent display.
    Mode,
    /// Profile threshold.
    ProfileThreshold,
    /// Profile precision.
    Precision,
    /// Reference data file.
    Reference,
}

impl ConfigKey {
    /// Every key, in display order.
    pub const ALL: [Self; 6] = [
        Self::TopCountries,
        Self::TopZones,
        Self::Mode,
        Self::ProfileThreshold,
        Self::Precision,
        Self::Reference,
    ];

    /// The key as written in the configuration file.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopCountries => "top_countries",
            Self::TopZones => "top_zones",
            Self::Mode => "mode",
            Self::ProfileThreshold => "profile_threshold",
            Self::Precision => "precision",
            Self::Reference => "reference",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopCountries => "Countries shown before the rest is folded into \"other\"",
            Self::TopZones => "Zones shown before folding (none = all)",
            Self::Mode => "Chart values (amount, percent)",
            Self::ProfileThreshold => "Hide asset classes at or below this value in profiles",
            Self::Precision => "Decimals in profile values (0-6)",
            Self::Reference => "Reference data file, .json or .toml (none = built-in)",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "top_countries" | "countries" => Ok(Self::TopCountries),
            "top_zones" | "zones" => Ok(Self::TopZones),
            "mode" => Ok(Self::Mode),
            "profile_threshold" | "threshold" => Ok(Self::ProfileThreshold),
            "precision" => Ok(Self::Precision),
            "reference" | "data" => Ok(Self::Reference),
            _ => Err(ConfigError::Validation {
                field: s.to_string(),
                message: "unknown configuration key".to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposure_core::AreaKind;

    #[test]
    fn test_defaults_match_view_settings() {
        let config = DashboardConfig::default();
        assert_eq!(config.settings(), ViewSettings::default());
        assert!(config.is_valid());
    }

    #[test]
    fn test_settings_conversion() {
        let settings = DashboardConfig::new()
            .with_top_countries(5)
            .with_top_zones(Some(3))
            .with_mode(DisplayMode::Percent)
            .with_precision(2)
            .settings();
        assert_eq!(settings.top_n(AreaKind::Country), Some(5));
        assert_eq!(settings.top_n(AreaKind::Zone), Some(3));
        assert_eq!(settings.mode, DisplayMode::Percent);
        assert_eq!(settings.precision, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = DashboardConfig::from_toml_str("mode = \"percent\"\ntop_countries = 8\n").unwrap();
        assert_eq!(config.mode, DisplayMode::Percent);
        assert_eq!(config.top_countries, 8);
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(config.reference.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DashboardConfig::new()
            .with_top_zones(Some(4))
            .with_reference("/data/funds.toml");
        let text = config.to_toml_string().unwrap();
        assert_eq!(DashboardConfig::from_toml_str(&text).unwrap(), config);

        let plain = DashboardConfig::default().to_toml_string().unwrap();
        assert!(!plain.contains("top_zones"));
        assert!(!plain.contains("reference"));
    }

    #[test]
    fn test_validation() {
        let config = DashboardConfig::new()
            .with_top_countries(0)
            .with_profile_threshold(-1.0)
            .with_precision(9);
        let errors = config.validate();
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));
        assert!(DashboardConfig::from_toml_str("top_countries = 0").is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = DashboardConfig::new();
        config.set(ConfigKey::Mode, "byPercent").unwrap();
        config.set(ConfigKey::TopZones, "5").unwrap();
        assert_eq!(config.get(ConfigKey::Mode), "percent");
        assert_eq!(config.get(ConfigKey::TopZones), "5");

        config.set(ConfigKey::TopZones, "none").unwrap();
        assert_eq!(config.top_zones, None);
        assert_eq!(config.get(ConfigKey::Reference), "none");
    }

    #[test]
    fn test_set_rejects_and_keeps_state() {
        let mut config = DashboardConfig::new();
        assert!(config.set(ConfigKey::TopCountries, "many").is_err());
        assert!(config.set(ConfigKey::Precision, "12").is_err());
        assert!(config.set(ConfigKey::Mode, "pie").is_err());
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_reset() {
        let mut config = DashboardConfig::new().with_top_countries(3);
        config.reset(ConfigKey::TopCountries);
        assert_eq!(config.top_countries, DEFAULT_TOP_COUNTRIES);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("top-countries".parse::<ConfigKey>().unwrap(), ConfigKey::TopCountries);
        assert_eq!("THRESHOLD".parse::<ConfigKey>().unwrap(), ConfigKey::ProfileThreshold);
        assert!("currency".parse::<ConfigKey>().is_err());
        for key in ConfigKey::ALL {
            assert_eq!(key.as_str().parse::<ConfigKey>().unwrap(), key);
        }
    }
}
