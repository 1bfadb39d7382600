//! Breakdown command implementation.
//!
//! Builds the full dashboard: country and zone bars plus the asset pie.

use anyhow::Result;
use clap::{Args, ValueEnum};
use exposure_analytics::{aggregate, DashboardView};
use exposure_core::DisplayMode;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::{Context, ViewArgs};
use crate::input::HoldingsArgs;
use crate::output::{
    print_chart, print_header, print_json_value, print_output, KeyValue, SegmentRow, SliceRow,
};

/// Arguments for the breakdown command.
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub holdings: HoldingsArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Which chart to show
    #[arg(long, value_enum, default_value = "all")]
    pub chart: ChartArg,
}

/// Chart selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    /// Countries bar chart
    Countries,
    /// Zones bar chart
    Zones,
    /// Asset-class pie
    Assets,
    /// Everything
    All,
}

/// Execute the breakdown command.
pub fn execute(args: BreakdownArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let data = ctx.load_reference(&config)?;
    let settings = args.view.settings(&config)?;
    let portfolio = ctx.load_holdings(&args.holdings, &data)?;

    let dist = aggregate(&portfolio, &data.funds)?;
    let view = DashboardView::build(&dist, &data.labels, &settings);
    info!(
        countries = view.countries.breakdown.len(),
        zones = view.zones.breakdown.len(),
        "built dashboard"
    );

    let precision = settings.precision;
    let show_countries = matches!(args.chart, ChartArg::Countries | ChartArg::All);
    let show_zones = matches!(args.chart, ChartArg::Zones | ChartArg::All);
    let show_assets = matches!(args.chart, ChartArg::Assets | ChartArg::All);

    match ctx.format {
        OutputFormat::Json => match args.chart {
            ChartArg::All => print_json_value(&view)?,
            ChartArg::Countries => print_json_value(&view.countries)?,
            ChartArg::Zones => print_json_value(&view.zones)?,
            ChartArg::Assets => print_json_value(&view.assets)?,
        },
        OutputFormat::Csv => {
            if args.chart == ChartArg::Assets {
                let rows = SliceRow::from_slices(&view.assets, precision, view.mode);
                print_output(&rows, ctx.format)?;
            } else {
                let mut rows = Vec::new();
                if show_countries {
                    rows.extend(SegmentRow::from_chart(&view.countries));
                }
                if show_zones {
                    rows.extend(SegmentRow::from_chart(&view.zones));
                }
                print_output(&rows, ctx.format)?;
            }
        }
        OutputFormat::Table | OutputFormat::Minimal => {
            if ctx.format == OutputFormat::Table && args.chart == ChartArg::All {
                print_header("Portfolio");
                let summary = vec![
                    KeyValue::new("Holdings", portfolio.len().to_string()),
                    KeyValue::new("Total", format!("{:.2}", view.total)),
                    KeyValue::new("Average Fee", format!("{:.3}%", view.fee_percent)),
                    KeyValue::new("Mode", view.mode.to_string()),
                ];
                print_output(&summary, ctx.format)?;
            }
            if show_countries {
                print_chart(&view.countries, &data.labels, precision, ctx.format)?;
            }
            if show_zones {
                print_chart(&view.zones, &data.labels, precision, ctx.format)?;
            }
            if show_assets {
                print_assets(&view, precision, ctx.format)?;
            }
        }
    }

    Ok(())
}

fn print_assets(view: &DashboardView, precision: usize, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Minimal {
        for slice in &view.assets {
            println!(
                "{}={}",
                slice.asset_class,
                exposure_analytics::format::format_value(slice.value, precision, view.mode)
            );
        }
        return Ok(());
    }
    let title = match view.mode {
        DisplayMode::Amount => "Asset Classes",
        DisplayMode::Percent => "Asset Classes (%)",
    };
    print_header(title);
    print_output(&SliceRow::from_slices(&view.assets, precision, view.mode), format)
}
