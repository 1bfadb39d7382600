//! Diff command implementation.
//!
//! Compares two holdings snapshots with the change detector.

use anyhow::Result;
use clap::Args;
use exposure_analytics::has_changed;
use exposure_core::{Portfolio, Ticker};
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use std::path::PathBuf;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::input::HoldingsArgs;
use crate::output::{print_info, print_json_value, print_output, print_success};

/// Arguments for the diff command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Earlier holdings file
    pub before: PathBuf,

    /// Later holdings file
    pub after: PathBuf,

    /// Exit with status 1 when the snapshots differ
    #[arg(long)]
    pub exit_code: bool,
}

/// One ticker whose amount differs.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DiffRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Before")]
    pub before: f64,
    #[tabled(rename = "After")]
    pub after: f64,
    #[tabled(rename = "Change")]
    pub change: f64,
}

/// Execute the diff command.
pub fn execute(args: DiffArgs, ctx: &Context) -> Result<()> {
    let before = read_snapshot(args.before)?;
    let after = read_snapshot(args.after)?;

    let changed = has_changed(&before, &after);
    let rows = differences(&before, &after);

    match ctx.format {
        OutputFormat::Json => print_json_value(&json!({
            "changed": changed,
            "differences": rows,
        }))?,
        OutputFormat::Minimal => println!("{}", if changed { "changed" } else { "unchanged" }),
        OutputFormat::Csv => print_output(&rows, ctx.format)?,
        OutputFormat::Table => {
            if changed {
                print_info(&format!("{} holding(s) changed", rows.len()));
                print_output(&rows, ctx.format)?;
            } else {
                print_success("Holdings unchanged");
            }
        }
    }

    if changed && args.exit_code {
        std::process::exit(1);
    }
    Ok(())
}

fn read_snapshot(path: PathBuf) -> Result<Portfolio> {
    let args = HoldingsArgs {
        input: Some(path),
        ..Default::default()
    };
    Ok(Portfolio::from_pairs(args.read_pairs()?)?)
}

/// Tickers whose amounts differ, absent tickers counting as zero.
fn differences(before: &Portfolio, after: &Portfolio) -> Vec<DiffRow> {
    let mut seen: HashSet<&Ticker> = HashSet::new();
    before
        .tickers()
        .chain(after.tickers())
        .filter(|t| seen.insert(*t))
        .filter_map(|ticker| {
            let (a, b) = (before.amount(ticker), after.amount(ticker));
            (a != b).then(|| DiffRow {
                ticker: ticker.to_string(),
                before: a,
                after: b,
                change: b - a,
            })
        })
        .collect()
}
