//! Display names for area codes.

use exposure_core::{AreaCode, OrderedMap};
use serde::{Deserialize, Serialize};

/// Maps area codes to the names shown in chart titles and profiles.
///
/// Codes without an entry display as themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    labels: OrderedMap<AreaCode, String>,
}

impl LabelTable {
    /// Creates an empty label table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels for the synthetic non-national areas (`NoN` for countries,
    /// `nn` for zones) and the "other" bucket.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_label("NoN", "Not National")
            .with_label("nn", "Not National")
            .with_label(AreaCode::OTHER, "Other")
    }

    /// Adds or replaces a label.
    #[must_use]
    pub fn with_label(mut self, code: impl Into<AreaCode>, name: impl Into<String>) -> Self {
        self.insert(code, name);
        self
    }

    /// Adds or replaces a label.
    pub fn insert(&mut self, code: impl Into<AreaCode>, name: impl Into<String>) {
        self.labels.insert(code.into(), name.into());
    }

    /// Merges `other` into this table; its entries win.
    pub fn extend(&mut self, other: &LabelTable) {
        for (code, name) in other.labels.iter() {
            self.labels.insert(code.clone(), name.clone());
        }
    }

    /// Display name for `code`.
    #[must_use]
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map_or(code, String::as_str)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
