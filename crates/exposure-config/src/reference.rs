//! Static reference data: exposure table, zone directory and labels.

use exposure_analytics::{LabelTable, ZoneDirectory};
use exposure_core::ExposureTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

const STANDARD_DATA: &str = include_str!("../data/standard.json");

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl FileFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Everything the dashboard needs besides the holdings.
///
/// Loaded once and shared read-only. Labels from the file are layered over
/// [`LabelTable::standard`], so the non-national codes always have a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Per-fund exposure records.
    pub funds: ExposureTable,

    /// Zone membership for drill-down.
    #[serde(default)]
    pub zones: ZoneDirectory,

    /// Display names for area codes.
    #[serde(default)]
    pub labels: LabelTable,
}

impl ReferenceData {
    /// The built-in dataset of common UCITS ETFs.
    pub fn standard() -> ConfigResult<Self> {
        Self::from_json_str(STANDARD_DATA)
    }

    /// Loads reference data from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;

        let data = match format {
            FileFormat::Json => Self::from_json_str(&text)?,
            FileFormat::Toml => Self::from_toml_str(&text)?,
        };
        info!(
            path = %path.display(),
            funds = data.funds.len(),
            zones = data.zones.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// Loads `path` if given, otherwise the built-in dataset.
    pub fn load_or_standard(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::standard(),
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let data: Self = serde_json::from_str(text)?;
        data.finish()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let data: Self = toml::from_str(text)?;
        data.finish()
    }

    /// Serializes to pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn finish(mut self) -> ConfigResult<Self> {
        self.validate_or_error()?;
        self.warn_unknown_zones();

        let mut labels = LabelTable::standard();
        labels.extend(&self.labels);
        self.labels = labels;
        Ok(self)
    }

    fn warn_unknown_zones(&self) {
        if self.zones.is_empty() {
            return;
        }
        for fund in self.funds.funds() {
            for zone in fund.zones.keys() {
                if self.zones.find(zone.as_str()).is_none() {
                    warn!(fund = %fund.ticker, zone = %zone, "fund weight refers to a zone with no directory entry");
                }
            }
        }
    }
}

impl Validate for ReferenceData {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.funds.is_empty() {
            errors.push(ValidationError::with_rule(
                "funds",
                "at least one fund is required",
                "non_empty",
            ));
        }

        for (code, zone) in self.zones.iter() {
            if zone.members.is_empty() {
                errors.push(ValidationError::with_rule(
                    format!("zones.{code}.members"),
                    "zone has no member countries",
                    "non_empty",
                ));
            }
        }

        errors
    }
}
