//! Drill command implementation.
//!
//! Restricts the country chart to the members of one zone.

use anyhow::Result;
use clap::Args;
use exposure_analytics::{aggregate, drill_down};

use crate::cli::OutputFormat;
use crate::commands::{Context, ViewArgs};
use crate::input::HoldingsArgs;
use crate::output::{print_chart, print_header, print_json_value, print_output, SliceRow};

/// Arguments for the drill command.
#[derive(Args, Debug)]
pub struct DrillArgs {
    /// Zone code (e.g. eu, na, as)
    pub zone: String,

    #[command(flatten)]
    pub holdings: HoldingsArgs,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Execute the drill command.
pub fn execute(args: DrillArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let data = ctx.load_reference(&config)?;
    let settings = args.view.settings(&config)?;
    let portfolio = ctx.load_holdings(&args.holdings, &data)?;

    let dist = aggregate(&portfolio, &data.funds)?;
    let drill = drill_down(&dist, &data.zones, &args.zone, &data.labels, &settings)?;

    match ctx.format {
        OutputFormat::Json => print_json_value(&drill)?,
        OutputFormat::Csv | OutputFormat::Minimal => {
            print_chart(&drill.countries, &data.labels, settings.precision, ctx.format)?;
        }
        OutputFormat::Table => {
            if drill.countries.is_empty() {
                ctx.warn(&format!("No holdings in zone {}", drill.zone));
            }
            print_chart(&drill.countries, &data.labels, settings.precision, ctx.format)?;
            print_header("Zone Asset Classes");
            let rows = SliceRow::from_slices(&drill.assets, settings.precision, settings.mode);
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
