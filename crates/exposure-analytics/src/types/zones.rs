//! Zone membership directory.

use exposure_core::{AreaCode, ExposureError, ExposureResult, OrderedMap};
use serde::{Deserialize, Serialize};

/// A regional zone and the countries it groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Display name, e.g. "Europe".
    pub name: String,

    /// Member country codes.
    #[serde(default)]
    pub members: Vec<AreaCode>,
}

impl Zone {
    /// Creates a zone.
    #[must_use]
    pub fn new<I, C>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<AreaCode>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Zone code → zone, in load order.
///
/// Lookups ignore ASCII case so `"EU"` and `"eu"` name the same zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneDirectory {
    zones: OrderedMap<AreaCode, Zone>,
}

impl ZoneDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a zone.
    pub fn insert(&mut self, code: impl Into<AreaCode>, zone: Zone) {
        self.zones.insert(code.into(), zone);
    }

    /// Adds or replaces a zone.
    #[must_use]
    pub fn with_zone(mut self, code: impl Into<AreaCode>, zone: Zone) -> Self {
        self.insert(code, zone);
        self
    }

    /// Finds a zone by code, ignoring case.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<(&AreaCode, &Zone)> {
        self.zones
            .get_key_value(code)
            .or_else(|| {
                self.zones
                    .iter()
                    .find(|(k, _)| k.as_str().eq_ignore_ascii_case(code))
            })
    }

    /// Finds a zone by code or returns an unknown zone error.
    pub fn require(&self, code: &str) -> ExposureResult<(&AreaCode, &Zone)> {
        self.find(code).ok_or_else(|| ExposureError::unknown_zone(code))
    }

    /// Iterates zones in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&AreaCode, &Zone)> {
        self.zones.iter()
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True if no zones are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
