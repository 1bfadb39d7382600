//! Change detection between portfolio snapshots.

use exposure_core::Portfolio;

/// True if any ticker's amount differs between `a` and `b`.
///
/// A ticker present on one side only counts as zero on the other, so
/// `{X: 10}` and `{X: 10, Y: 0}` are unchanged. Amounts are compared exactly.
#[must_use]
pub fn has_changed(a: &Portfolio, b: &Portfolio) -> bool {
    a.tickers()
        .chain(b.tickers())
        .any(|ticker| a.amount(ticker) != b.amount(ticker))
}
