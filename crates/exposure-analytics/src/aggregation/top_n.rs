//! Top-N reduction of area breakdowns.

use exposure_core::{AreaCode, Breakdown};
use std::cmp::Ordering;

/// Keeps the `n` largest areas and folds the rest into an "other" area.
///
/// Areas are ranked by their sum, largest first; ties keep input order. The
/// kept areas are copied verbatim in ranked order. "other" holds, per asset
/// class, the sum of that class over the dropped areas. Every class of the
/// input gets an entry, zero when it only appears in kept areas.
///
/// A breakdown with at most `n` areas is returned unchanged. An input area
/// literally named "other" is ranked like any other; if it survives, the
/// residual is added to it and the result has `n` entries.
///
/// # Example
///
/// ```rust
/// use exposure_analytics::reduce_to_top_n;
/// use exposure_core::{AssetClass, Breakdown};
///
/// let mut b = Breakdown::new();
/// b.add("A", AssetClass::Stock, 50.0);
/// b.add("B", AssetClass::Stock, 30.0);
/// b.add("C", AssetClass::Stock, 20.0);
///
/// let top = reduce_to_top_n(&b, 1);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top.amount("A", &AssetClass::Stock), 50.0);
/// assert_eq!(top.amount("other", &AssetClass::Stock), 50.0);
/// ```
#[must_use]
pub fn reduce_to_top_n(breakdown: &Breakdown, n: usize) -> Breakdown {
    if breakdown.len() <= n {
        return breakdown.clone();
    }

    // sort_by is stable, so equal sums keep insertion order
    let mut ranked: Vec<(&AreaCode, f64)> = breakdown.area_sums().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut reduced = breakdown.select(ranked.iter().take(n).map(|(code, _)| *code));

    // sum of the dropped areas; one dropped area is reproduced exactly
    for class in breakdown.asset_totals().into_keys() {
        reduced.add(AreaCode::other(), class, 0.0);
    }
    for (code, _) in ranked.iter().skip(n) {
        if let Some(amounts) = breakdown.get(code.as_str()) {
            for (class, &amount) in amounts {
                reduced.add(AreaCode::other(), class.clone(), amount);
            }
        }
    }

    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exposure_core::AssetClass;

    fn three_areas() -> Breakdown {
        let mut b = Breakdown::new();
        b.add("A", AssetClass::Stock, 50.0);
        b.add("B", AssetClass::Stock, 30.0);
        b.add("C", AssetClass::Stock, 20.0);
        b
    }

    #[test]
    fn test_top_one() {
        let top = reduce_to_top_n(&three_areas(), 1);
        let areas: Vec<_> = top.areas().map(AreaCode::as_str).collect();
        assert_eq!(areas, vec!["A", "other"]);
        assert_eq!(top.amount("other", &AssetClass::Stock), 50.0);
    }

    #[test]
    fn test_small_input_unchanged() {
        let b = three_areas();
        assert_eq!(reduce_to_top_n(&b, 3), b);
        assert_eq!(reduce_to_top_n(&b, 10), b);
    }

    #[test]
    fn test_ranks_by_sum_not_position() {
        let mut b = Breakdown::new();
        b.add("SMALL", AssetClass::Bond, 1.0);
        b.add("BIG", AssetClass::Stock, 9.0);
        b.add("MID", AssetClass::Gold, 5.0);

        let top = reduce_to_top_n(&b, 2);
        let areas: Vec<_> = top.areas().map(AreaCode::as_str).collect();
        assert_eq!(areas, vec!["BIG", "MID", "other"]);
        assert_eq!(top.amount("other", &AssetClass::Bond), 1.0);
        assert_eq!(top.amount("other", &AssetClass::Stock), 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut b = Breakdown::new();
        b.add("X", AssetClass::Stock, 10.0);
        b.add("Y", AssetClass::Stock, 10.0);
        b.add("Z", AssetClass::Stock, 10.0);

        let top = reduce_to_top_n(&b, 2);
        let areas: Vec<_> = top.areas().map(AreaCode::as_str).collect();
        assert_eq!(areas, vec!["X", "Y", "other"]);
    }

    #[test]
    fn test_residual_per_asset_class() {
        let mut b = Breakdown::new();
        b.add("USA", AssetClass::Stock, 40.0);
        b.add("USA", AssetClass::Bond, 10.0);
        b.add("GBR", AssetClass::Bond, 20.0);
        b.add("NoN", AssetClass::Gold, 5.0);
        b.add("JPN", AssetClass::Stock, 3.0);

        let top = reduce_to_top_n(&b, 2);
        assert_eq!(top.len(), 3);
        assert_relative_eq!(top.amount("other", &AssetClass::Gold), 5.0);
        assert_relative_eq!(top.amount("other", &AssetClass::Stock), 3.0);
        assert_relative_eq!(top.amount("other", &AssetClass::Bond), 0.0);
        assert_relative_eq!(top.grand_total(), b.grand_total());
    }

    #[test]
    fn test_zero_keeps_only_other() {
        let top = reduce_to_top_n(&three_areas(), 0);
        assert_eq!(top.len(), 1);
        assert_eq!(top.area_sum("other"), 100.0);
    }

    #[test]
    fn test_existing_other_area() {
        let mut b = Breakdown::new();
        b.add("other", AssetClass::Stock, 50.0);
        b.add("A", AssetClass::Stock, 30.0);
        b.add("B", AssetClass::Stock, 20.0);

        let top = reduce_to_top_n(&b, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top.amount("other", &AssetClass::Stock), 100.0);
    }

    fn tied_tenths() -> Breakdown {
        let mut b = Breakdown::new();
        b.add("A", AssetClass::Stock, 0.1);
        b.add("A", AssetClass::Bond, 0.1);
        b.add("B", AssetClass::Stock, 0.1);
        b.add("C", AssetClass::Bond, 0.1);
        b.add("D", AssetClass::Stock, 0.1);
        b
    }

    #[test]
    fn test_single_dropped_area_is_exact() {
        let b = tied_tenths();
        let once = reduce_to_top_n(&b, b.len() - 1);
        let areas: Vec<_> = once.areas().map(AreaCode::as_str).collect();
        assert_eq!(areas, vec!["A", "B", "C", "other"]);
        assert_eq!(once.amount("other", &AssetClass::Stock), 0.1);
        assert_eq!(once.amount("other", &AssetClass::Bond), 0.0);
        assert_eq!(once.area_sum("other"), b.area_sum("D"));
    }

    #[test]
    fn test_reduce_twice_with_ties() {
        let b = tied_tenths();
        let n = b.len() - 1;
        let once = reduce_to_top_n(&b, n);
        assert_eq!(reduce_to_top_n(&once, n), once);
    }

    #[test]
    fn test_residual_never_negative() {
        let mut b = Breakdown::new();
        b.add("A", AssetClass::Stock, 0.1);
        b.add("B", AssetClass::Stock, 0.1);
        b.add("C", AssetClass::Stock, 0.1);
        b.add("D", AssetClass::Stock, 1.1);
        b.add("Z", AssetClass::Bond, 0.001);

        let top = reduce_to_top_n(&b, 4);
        assert_eq!(top.amount("other", &AssetClass::Stock), 0.0);
        assert_eq!(top.amount("other", &AssetClass::Bond), 0.001);
        assert!(top
            .iter()
            .flat_map(|(_, amounts)| amounts.values())
            .all(|&v| v >= 0.0));
    }

    #[test]
    fn test_input_untouched() {
        let b = three_areas();
        let before = b.clone();
        let _ = reduce_to_top_n(&b, 1);
        assert_eq!(b, before);
    }
}
