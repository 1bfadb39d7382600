//! Domain types for portfolio exposure analytics.
//!
//! - [`Ticker`], [`AreaCode`]: fund and area identifiers
//! - [`AssetClass`], [`AreaKind`], [`DisplayMode`]: classification enums
//! - [`FundExposure`], [`ExposureTable`]: static per-fund reference data
//! - [`Portfolio`], [`PortfolioBuilder`]: holdings snapshot
//! - [`Breakdown`]: area → asset class → amount
//! - [`OrderedMap`]: the insertion-ordered map underneath all of them

mod breakdown;
mod classification;
mod fund;
mod ids;
mod ordered;
mod portfolio;

pub use breakdown::{AssetAmounts, Breakdown};
pub use classification::{AreaKind, AssetClass, DisplayMode};
pub use fund::{ExposureTable, FundExposure, Weights};
pub use ids::{AreaCode, Ticker};
pub use ordered::OrderedMap;
pub use portfolio::{Portfolio, PortfolioBuilder};
