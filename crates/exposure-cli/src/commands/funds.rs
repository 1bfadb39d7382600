//! Funds command implementation.
//!
//! Lists the exposure table, or the weights of one fund.

use anyhow::Result;
use clap::Args;
use exposure_core::{FundExposure, Ticker};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_json_value, print_output, KeyValue};

/// Arguments for the funds command.
#[derive(Args, Debug)]
pub struct FundsArgs {
    /// Show the country and zone weights of this fund
    pub ticker: Option<String>,
}

/// One fund in the listing.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FundRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Class")]
    pub asset_class: String,
    #[tabled(rename = "Fee %")]
    pub fee_percent: f64,
    #[tabled(rename = "Countries")]
    pub countries: usize,
    #[tabled(rename = "Zones")]
    pub zones: usize,
}

impl From<&FundExposure> for FundRow {
    fn from(fund: &FundExposure) -> Self {
        Self {
            ticker: fund.ticker.to_string(),
            name: fund.name.clone().unwrap_or_default(),
            asset_class: fund.asset_class.to_string(),
            fee_percent: fund.fee_percent,
            countries: fund.countries.len(),
            zones: fund.zones.len(),
        }
    }
}

/// One area weight of a fund.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct WeightRow {
    #[tabled(rename = "Area")]
    pub area: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Weight %")]
    pub weight: f64,
}

/// Execute the funds command.
pub fn execute(args: FundsArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let data = ctx.load_reference(&config)?;

    let Some(ticker) = args.ticker else {
        let rows: Vec<FundRow> = data.funds.funds().map(FundRow::from).collect();
        if ctx.format == OutputFormat::Table {
            print_header("Funds");
        }
        return print_output(&rows, ctx.format);
    };

    let fund = data.funds.require(&Ticker::new(&ticker))?;
    let weights = |map: &exposure_core::Weights| -> Vec<WeightRow> {
        map.iter()
            .map(|(area, &weight)| WeightRow {
                area: area.to_string(),
                name: data.labels.display_name(area.as_str()).to_string(),
                weight,
            })
            .collect()
    };

    match ctx.format {
        OutputFormat::Json => print_json_value(fund)?,
        OutputFormat::Table => {
            print_header(&format!("Fund {}", fund.ticker));
            let summary = vec![
                KeyValue::new("Name", fund.name.clone().unwrap_or_default()),
                KeyValue::new("Asset Class", fund.asset_class.to_string()),
                KeyValue::new("Fee", format!("{}%", fund.fee_percent)),
                KeyValue::new("Country Coverage", format!("{:.1}%", fund.country_coverage())),
                KeyValue::new("Zone Coverage", format!("{:.1}%", fund.zone_coverage())),
            ];
            print_output(&summary, ctx.format)?;
            print_header("Countries");
            print_output(&weights(&fund.countries), ctx.format)?;
            print_header("Zones");
            print_output(&weights(&fund.zones), ctx.format)?;
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            print_output(&weights(&fund.countries), ctx.format)?;
        }
    }

    Ok(())
}
