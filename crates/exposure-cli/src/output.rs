//! Output formatting utilities.

use colored::Colorize;
use exposure_analytics::format::format_value;
use exposure_analytics::{AssetSlice, ChartView, LabelTable};
use exposure_core::DisplayMode;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single serializable value as JSON.
pub fn print_json_value<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    print_json_value(data)
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints the first column of each row, one per line.
fn print_minimal<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    for row in data {
        if let Some(first) = row.fields().first() {
            println!("{}", first);
        }
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One area of a chart.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct AreaRow {
    #[tabled(rename = "Area")]
    pub area: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Asset Classes")]
    pub classes: String,
}

impl AreaRow {
    /// Rows for every area of `chart`, in chart order.
    pub fn from_chart(chart: &ChartView, labels: &LabelTable, precision: usize) -> Vec<Self> {
        let fmt = |v: f64| format_value(v, precision, chart.mode);
        chart
            .breakdown
            .iter()
            .map(|(area, amounts)| Self {
                area: area.to_string(),
                name: labels.display_name(area.as_str()).to_string(),
                total: fmt(amounts.values().sum()),
                classes: amounts
                    .iter()
                    .map(|(class, &v)| format!("{class} {}", fmt(v)))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect()
    }
}

/// One stacked-bar segment, for CSV export.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SegmentRow {
    #[tabled(rename = "Chart")]
    pub chart: String,
    #[tabled(rename = "Area")]
    pub area: String,
    #[tabled(rename = "Asset Class")]
    pub asset_class: String,
    #[tabled(rename = "Start")]
    pub start: f64,
    #[tabled(rename = "End")]
    pub end: f64,
}

impl SegmentRow {
    /// Rows for every segment of `chart`.
    pub fn from_chart(chart: &ChartView) -> Vec<Self> {
        chart
            .segments
            .iter()
            .map(|s| Self {
                chart: chart.kind.label().to_string(),
                area: s.area.to_string(),
                asset_class: s.asset_class.to_string(),
                start: s.start,
                end: s.end,
            })
            .collect()
    }
}

/// One asset-class pie slice.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SliceRow {
    #[tabled(rename = "Asset Class")]
    pub asset_class: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl SliceRow {
    /// Rows for every slice.
    pub fn from_slices(slices: &[AssetSlice], precision: usize, mode: DisplayMode) -> Vec<Self> {
        slices
            .iter()
            .map(|s| Self {
                asset_class: s.asset_class.to_string(),
                value: format_value(s.value, precision, mode),
            })
            .collect()
    }
}

/// Prints a chart in the requested format.
///
/// Table and minimal output list one row per area; CSV lists the stacked-bar
/// segments; JSON is the full chart view.
pub fn print_chart(
    chart: &ChartView,
    labels: &LabelTable,
    precision: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(&chart.title);
            print_output(&AreaRow::from_chart(chart, labels, precision), format)
        }
        OutputFormat::Minimal => {
            for (area, total) in chart.breakdown.area_sums() {
                println!("{}={}", area, format_value(total, precision, chart.mode));
            }
            Ok(())
        }
        OutputFormat::Csv => print_output(&SegmentRow::from_chart(chart), format),
        OutputFormat::Json => print_json_value(chart),
    }
}
