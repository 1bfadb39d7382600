//! # Exposure Core
//!
//! Core types for the Exposure portfolio allocation engine.
//!
//! This crate provides the data model shared by every other Exposure crate:
//!
//! - **Identifiers**: [`Ticker`] for funds, [`AreaCode`] for countries and zones
//! - **Classification**: [`AssetClass`], [`AreaKind`], [`DisplayMode`]
//! - **Reference data**: [`FundExposure`] records collected in an [`ExposureTable`]
//! - **Holdings**: an immutable [`Portfolio`] built with [`PortfolioBuilder`]
//! - **Results**: [`Breakdown`], the ordered area → asset-class amount mapping
//!
//! ## Design Philosophy
//!
//! - **Immutable snapshots**: portfolios and tables are never modified after construction
//! - **Deterministic ordering**: every map preserves insertion order
//! - **Derived sums**: per-area totals are computed on demand, never stored beside
//!   asset-class amounts
//!
//! ## Example
//!
//! ```rust
//! use exposure_core::prelude::*;
//!
//! let fund = FundExposure::new("VWRL", AssetClass::Stock, 0.22)
//!     .with_country("USA", 60.0)
//!     .with_country("GBR", 40.0)
//!     .with_zone("NA", 60.0)
//!     .with_zone("UK", 40.0);
//! let table = ExposureTable::from_funds([fund]).unwrap();
//!
//! let portfolio = Portfolio::builder().holding("vwrl", 100.0).build().unwrap();
//! assert!(table.contains(&Ticker::new("VWRL")));
//! assert_eq!(portfolio.total(), 100.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ExposureError, ExposureResult};
    pub use crate::types::{
        AreaCode, AreaKind, AssetAmounts, AssetClass, Breakdown, DisplayMode, ExposureTable,
        FundExposure, OrderedMap, Portfolio, PortfolioBuilder, Ticker, Weights,
    };
}

// Re-export commonly used types at crate root
pub use error::{ExposureError, ExposureResult};
pub use types::{
    AreaCode, AreaKind, AssetAmounts, AssetClass, Breakdown, DisplayMode, ExposureTable,
    FundExposure, OrderedMap, Portfolio, PortfolioBuilder, Ticker, Weights,
};
