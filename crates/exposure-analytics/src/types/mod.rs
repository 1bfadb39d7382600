//! Supporting types for exposure analytics.
//!
//! - [`ViewSettings`]: chart parameters (top-N, mode, profile formatting)
//! - [`LabelTable`]: display names for area codes
//! - [`ZoneDirectory`]: zone membership used by drill-down

mod labels;
mod settings;
mod zones;

pub use labels::LabelTable;
pub use settings::{
    ViewSettings, DEFAULT_PRECISION, DEFAULT_PROFILE_THRESHOLD, DEFAULT_TOP_COUNTRIES,
};
pub use zones::{Zone, ZoneDirectory};
