//! Exposure CLI - Command-line interface for portfolio exposure analysis.
//!
//! # Usage
//!
//! ```bash
//! # Full dashboard for a holdings file
//! exposure breakdown --input holdings.csv
//!
//! # Inline holdings, percent of total
//! exposure breakdown VWRL=60 IGLT=40 --mode percent
//!
//! # Countries of one zone
//! exposure drill eu --input holdings.csv
//!
//! # Tooltip lines for an area
//! exposure profile GBR --input holdings.csv
//!
//! # Compare two snapshots
//! exposure diff before.csv after.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let ctx = cli.context();

    match cli.command {
        Commands::Breakdown(args) => commands::breakdown::execute(args, &ctx)?,
        Commands::Drill(args) => commands::drill::execute(args, &ctx)?,
        Commands::Funds(args) => commands::funds::execute(args, &ctx)?,
        Commands::Profile(args) => commands::profile::execute(args, &ctx)?,
        Commands::Diff(args) => commands::diff::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("exposure=debug,exposure_analytics=debug,exposure_config=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
