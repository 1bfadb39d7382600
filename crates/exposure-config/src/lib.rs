//! Exposure Configuration Layer
//!
//! Loads the static reference data the dashboard works from and the
//! settings that shape its charts.
//!
//! # Features
//!
//! - **Reference Data**: fund exposure table, zone directory and area labels,
//!   from JSON or TOML, with a built-in dataset of common UCITS ETFs
//! - **Dashboard Settings**: top-N limits, display mode and profile formatting,
//!   persisted as TOML
//! - **Validation**: every loaded document is checked through [`Validate`]
//!
//! # Example
//!
//! ```rust
//! use exposure_analytics::{aggregate, DashboardView};
//! use exposure_config::{DashboardConfig, ReferenceData};
//! use exposure_core::{DisplayMode, Portfolio};
//!
//! let data = ReferenceData::standard().unwrap();
//! let config = DashboardConfig::new().with_mode(DisplayMode::Percent);
//!
//! let portfolio = Portfolio::from_pairs([("VWRL", 60.0), ("IGLT", 40.0)]).unwrap();
//! let dist = aggregate(&portfolio, &data.funds).unwrap();
//! let view = DashboardView::build(&dist, &data.labels, &config.settings());
//!
//! assert_eq!(view.total, 100.0);
//! ```
//!
//! # Reference Data Format
//!
//! ```toml
//! [[funds]]
//! ticker = "IGLN"
//! assetClass = "gold"
//! fee = 0.12
//! countries = { NoN = 100 }
//! zones = { nn = 100 }
//!
//! [zones.nn]
//! name = "Not National"
//! members = ["NoN"]
//!
//! [labels]
//! nn = "Not National"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod dashboard;
mod error;
mod reference;

pub use dashboard::{ConfigKey, DashboardConfig, MAX_PRECISION};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use reference::{FileFormat, ReferenceData};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dashboard::{ConfigKey, DashboardConfig};
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::reference::ReferenceData;
}
