//! Chart formatting.
//!
//! Provides:
//! - Percent normalization of breakdowns and asset totals
//! - Flattening breakdowns into stacked-bar segments
//! - Tooltip profiles for single areas

mod normalize;
mod profile;
mod segments;

pub use normalize::{apply_mode, asset_slices, to_percent, AssetSlice};
pub use profile::{format_value, profiles, summarize, summarize_with, AreaProfile};
pub use segments::{flatten, Segment};
