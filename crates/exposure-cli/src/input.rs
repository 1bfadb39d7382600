//! Holdings input: `TICKER,AMOUNT` CSV files and `TICKER=AMOUNT` arguments.

use clap::Args;
use csv::{ReaderBuilder, Trim};
use exposure_core::{ExposureTable, Portfolio, Ticker};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Holdings arguments shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct HoldingsArgs {
    /// Holdings as TICKER=AMOUNT pairs
    #[arg(value_name = "TICKER=AMOUNT")]
    pub holdings: Vec<String>,

    /// CSV file of TICKER,AMOUNT rows ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Rescale the holdings so they sum to 100
    #[arg(long)]
    pub normalize: bool,
}

/// Holdings ready for aggregation.
#[derive(Debug, Clone)]
pub struct Holdings {
    /// Holdings whose funds are in the exposure table.
    pub portfolio: Portfolio,
    /// Tickers dropped because the table has no record for them.
    pub dropped: Vec<Ticker>,
}

impl HoldingsArgs {
    /// Reads every holding from the file and the arguments, in that order.
    pub fn read_pairs(&self) -> CliResult<Vec<(String, f64)>> {
        let mut pairs = Vec::new();
        if let Some(path) = &self.input {
            pairs.extend(read_file(path)?);
        }
        for (i, arg) in self.holdings.iter().enumerate() {
            pairs.push(parse_pair(arg, i + 1)?);
        }
        if pairs.is_empty() {
            return Err(CliError::NoHoldings);
        }
        Ok(pairs)
    }

    /// Builds the portfolio, dropping tickers unknown to `table`.
    pub fn load(&self, table: &ExposureTable) -> CliResult<Holdings> {
        let portfolio = Portfolio::from_pairs(self.read_pairs()?)?;
        let (known, dropped) = portfolio.partition_known(table);
        for ticker in &dropped {
            warn!(ticker = %ticker, "no exposure data for fund, skipping");
        }

        let portfolio = if self.normalize {
            known.normalized_to(100.0)
        } else {
            known
        };
        debug!(
            holdings = portfolio.len(),
            total = portfolio.total(),
            "loaded holdings"
        );
        Ok(Holdings { portfolio, dropped })
    }
}

/// Parses one `TICKER=AMOUNT` argument.
pub fn parse_pair(arg: &str, position: usize) -> CliResult<(String, f64)> {
    let (ticker, amount) = arg.split_once('=').ok_or_else(|| {
        CliError::invalid_holding("arguments", position, format!("expected TICKER=AMOUNT, got '{arg}'"))
    })?;
    let amount = parse_amount(amount, "arguments", position)?;
    Ok((ticker.trim().to_string(), amount))
}

fn read_file(path: &Path) -> CliResult<Vec<(String, f64)>> {
    if path == Path::new("-") {
        return read_csv(std::io::stdin().lock(), "stdin");
    }
    let file = std::fs::File::open(path)?;
    read_csv(file, &path.display().to_string())
}

/// Reads `TICKER,AMOUNT` rows.
///
/// A first row whose amount is not a number is taken as a header. Blank lines
/// and lines starting with `#` are skipped.
pub fn read_csv<R: Read>(reader: R, source_name: &str) -> CliResult<Vec<(String, f64)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| CliError::invalid_holding(source_name, i + 1, e.to_string()))?;
        let line = record.position().map_or(i + 1, |p| p.line() as usize);

        if record.len() != 2 {
            return Err(CliError::invalid_holding(
                source_name,
                line,
                format!("expected 2 fields, found {}", record.len()),
            ));
        }
        let (ticker, amount) = (&record[0], &record[1]);

        if i == 0 && amount.parse::<f64>().is_err() {
            debug!(source = source_name, "skipping header row");
            continue;
        }
        pairs.push((ticker.to_string(), parse_amount(amount, source_name, line)?));
    }
    Ok(pairs)
}

fn parse_amount(text: &str, source_name: &str, line: usize) -> CliResult<f64> {
    let text = text.trim();
    let amount: f64 = text
        .parse()
        .map_err(|_| CliError::invalid_holding(source_name, line, format!("'{text}' is not a number")))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CliError::invalid_holding(
            source_name,
            line,
            format!("amount must be a non-negative number, got {text}"),
        ));
    }
    Ok(amount)
}
