//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use exposure_core::{AreaKind, DisplayMode};
use std::path::PathBuf;

use crate::commands::{
    BreakdownArgs, ConfigArgs, Context, DiffArgs, DrillArgs, FundsArgs, ProfileArgs,
};

/// Exposure - Portfolio allocation by country, zone and asset class
#[derive(Parser)]
#[command(name = "exposure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reference data file (.json or .toml), overriding the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Settings file location
    #[arg(long, global = true, env = "EXPOSURE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options shared by every command.
    pub fn context(&self) -> Context {
        Context {
            format: self.format,
            quiet: self.quiet,
            data: self.data.clone(),
            config: self.config.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show country, zone and asset-class charts for a set of holdings
    Breakdown(BreakdownArgs),

    /// Show the countries of one zone
    Drill(DrillArgs),

    /// List the funds in the reference data
    Funds(FundsArgs),

    /// Show the asset-class profile of one country or zone
    Profile(ProfileArgs),

    /// Compare two holdings snapshots
    Diff(DiffArgs),

    /// Manage dashboard settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (one value per line)
    Minimal,
}

/// Chart value mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Absolute amounts
    Amount,
    /// Percent of the total
    Percent,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Amount => DisplayMode::Amount,
            ModeArg::Percent => DisplayMode::Percent,
        }
    }
}

/// Area grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Countries
    Country,
    /// Zones
    Zone,
}

impl From<KindArg> for AreaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Country => AreaKind::Country,
            KindArg::Zone => AreaKind::Zone,
        }
    }
}
