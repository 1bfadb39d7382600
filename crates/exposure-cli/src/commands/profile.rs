//! Profile command implementation.
//!
//! Prints the tooltip lines of one country or zone.

use anyhow::Result;
use clap::Args;
use exposure_analytics::{aggregate, ChartView, DashboardView};
use exposure_core::AreaKind;
use serde_json::json;

use crate::cli::{KindArg, OutputFormat};
use crate::commands::{Context, ViewArgs};
use crate::error::CliError;
use crate::input::HoldingsArgs;
use crate::output::print_json_value;

/// Arguments for the profile command.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Country or zone code (e.g. GBR, eu, other)
    pub area: String,

    #[command(flatten)]
    pub holdings: HoldingsArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Look the area up among countries or zones only
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Execute the profile command.
pub fn execute(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let data = ctx.load_reference(&config)?;
    let settings = args.view.settings(&config)?;
    let portfolio = ctx.load_holdings(&args.holdings, &data)?;

    let dist = aggregate(&portfolio, &data.funds)?;
    let view = DashboardView::build(&dist, &data.labels, &settings);

    let kinds = match args.kind {
        Some(kind) => vec![AreaKind::from(kind)],
        None => vec![AreaKind::Country, AreaKind::Zone],
    };
    let (kind, area, lines) = kinds
        .into_iter()
        .find_map(|kind| find_profile(view.chart(kind), &args.area).map(|(a, l)| (kind, a, l)))
        .ok_or_else(|| CliError::UnknownArea(args.area.clone()))?;

    match ctx.format {
        OutputFormat::Json => print_json_value(&json!({
            "area": area,
            "kind": kind,
            "lines": lines,
        }))?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["area", "line"])?;
            for line in lines {
                wtr.write_record([area.as_str(), line.trim_start()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table | OutputFormat::Minimal => {
            for line in lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Profile of `area` in `chart`, matching the code exactly first and then
/// ignoring case.
fn find_profile<'a>(chart: &'a ChartView, area: &str) -> Option<(String, &'a [String])> {
    let code = chart
        .areas()
        .find(|a| a.as_str() == area)
        .or_else(|| chart.areas().find(|a| a.as_str().eq_ignore_ascii_case(area)))?;
    chart
        .profile(code.as_str())
        .map(|lines| (code.to_string(), lines))
}
