//! Portfolio aggregation and top-N reduction.
//!
//! Provides:
//! - Folding holdings through the exposure table into country, zone and
//!   asset-class breakdowns
//! - Reducing a breakdown to its N largest areas plus an "other" residual

mod distribution;
mod top_n;

pub use distribution::{aggregate, Distribution};
pub use top_n::reduce_to_top_n;
