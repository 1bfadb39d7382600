//! # Exposure Analytics
//!
//! Portfolio distribution engine for the Exposure dashboard.
//!
//! This crate folds fund holdings through a static exposure table into
//! country, zone and asset-class breakdowns and prepares them for charting.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every stage takes its inputs by reference and returns new values
//! - **Area-agnostic**: one top-N and flatten implementation serves countries and zones
//! - **No NaN**: empty portfolios give empty distributions and zeroed percentages
//!
//! ## Pipeline
//!
//! 1. [`aggregate`] - portfolio + exposure table → [`Distribution`]
//! 2. [`reduce_to_top_n`] - keep the N largest areas, fold the rest into "other"
//! 3. [`to_percent`] / [`flatten`] - display units and stacked-bar segments
//! 4. [`summarize`] - tooltip lines per area
//!
//! [`DashboardView`] runs steps 2-4 for every chart, [`drill_down`] narrows the
//! country chart to one zone, and [`DashboardSession`] uses [`has_changed`] to
//! skip recomputation when the holdings did not change.
//!
//! ## Quick Start
//!
//! ```rust
//! use exposure_analytics::prelude::*;
//! use exposure_core::{AssetClass, ExposureTable, FundExposure, Portfolio};
//!
//! let table = ExposureTable::from_funds([
//!     FundExposure::new("XDUS", AssetClass::Stock, 0.07).with_country("USA", 100.0),
//!     FundExposure::new("IGLN", AssetClass::Gold, 0.25).with_country("NoN", 100.0),
//! ])
//! .unwrap();
//! let portfolio = Portfolio::from_pairs([("XDUS", 75.0), ("IGLN", 25.0)]).unwrap();
//!
//! let dist = aggregate(&portfolio, &table).unwrap();
//! let view = DashboardView::build(&dist, &LabelTable::standard(), &ViewSettings::default());
//!
//! assert_eq!(view.countries.segments.len(), 2);
//! assert_eq!(view.countries.profile("NoN").unwrap()[0], "Not National 25.0");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod change;
pub mod dashboard;
pub mod format;
pub mod types;

pub use aggregation::{aggregate, reduce_to_top_n, Distribution};
pub use change::has_changed;
pub use dashboard::{drill_down, ChartView, DashboardSession, DashboardView, DrillDown};
pub use format::{
    apply_mode, asset_slices, flatten, format_value, profiles, summarize, summarize_with,
    to_percent, AreaProfile, AssetSlice, Segment,
};
pub use types::{LabelTable, ViewSettings, Zone, ZoneDirectory};

/// Prelude module for convenient imports.
///
/// ```rust
/// use exposure_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregation::{aggregate, reduce_to_top_n, Distribution};
    pub use crate::change::has_changed;
    pub use crate::dashboard::{drill_down, ChartView, DashboardSession, DashboardView, DrillDown};
    pub use crate::format::{flatten, summarize, to_percent, AssetSlice, Segment};
    pub use crate::types::{LabelTable, ViewSettings, Zone, ZoneDirectory};
}
