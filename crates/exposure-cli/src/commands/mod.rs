//! CLI command implementations.

pub mod breakdown;
pub mod config;
pub mod diff;
pub mod drill;
pub mod funds;
pub mod profile;

// Re-export submodules for convenience
pub use breakdown::BreakdownArgs;
pub use config::ConfigArgs;
pub use diff::DiffArgs;
pub use drill::DrillArgs;
pub use funds::FundsArgs;
pub use profile::ProfileArgs;

use anyhow::Result;
use clap::Args;
use exposure_analytics::ViewSettings;
use exposure_config::{DashboardConfig, ReferenceData};
use exposure_core::Portfolio;
use std::path::PathBuf;

use crate::cli::{ModeArg, OutputFormat};
use crate::input::HoldingsArgs;
use crate::output::print_warning;

/// Global options passed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress warnings and informational lines.
    pub quiet: bool,
    /// Reference data override.
    pub data: Option<PathBuf>,
    /// Settings file override.
    pub config: Option<PathBuf>,
}

impl Context {
    /// Location of the settings file.
    pub fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.config {
            return Ok(path.clone());
        }
        let home = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(home.join("exposure").join("config.toml"))
    }

    /// Saved settings, or defaults if none were saved.
    pub fn load_config(&self) -> Result<DashboardConfig> {
        Ok(DashboardConfig::load_or_default(self.config_path()?)?)
    }

    /// Reference data from `--data`, the settings file or the built-in set.
    pub fn load_reference(&self, config: &DashboardConfig) -> Result<ReferenceData> {
        let data = match &self.data {
            Some(path) => ReferenceData::load(path)?,
            None => config.reference_data()?,
        };
        Ok(data)
    }

    /// Reads the holdings, warning about funds with no exposure data.
    pub fn load_holdings(&self, args: &HoldingsArgs, data: &ReferenceData) -> Result<Portfolio> {
        let holdings = args.load(&data.funds)?;
        for ticker in &holdings.dropped {
            self.warn(&format!("Unknown fund {ticker}, ignored"));
        }
        Ok(holdings.portfolio)
    }

    /// Prints a warning unless `--quiet` is set.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            print_warning(message);
        }
    }
}

/// Chart options shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Show amounts or percent of total (default from settings)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Countries shown before the rest is folded into "other"
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Zones shown before the rest is folded into "other"
    #[arg(long, value_name = "N")]
    pub top_zones: Option<usize>,
}

impl ViewArgs {
    /// Settings from the saved configuration with command-line overrides.
    pub fn settings(&self, config: &DashboardConfig) -> Result<ViewSettings> {
        let mut settings = config.settings();
        if let Some(mode) = self.mode {
            settings = settings.with_mode(mode.into());
        }
        if let Some(n) = self.top {
            anyhow::ensure!(n > 0, "--top must be at least 1");
            settings = settings.with_top_countries(n);
        }
        if let Some(n) = self.top_zones {
            anyhow::ensure!(n > 0, "--top-zones must be at least 1");
            settings = settings.with_top_zones(Some(n));
        }
        Ok(settings)
    }
}
