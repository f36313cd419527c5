// File: crates/chart-core/src/bounds.rs
// Summary: Range aggregation over datasets, independent of renderer type.

use crate::dataset::XyDataset;
use crate::range::Range;

/// Compute the inclusive range of values a renderer needs to display.
///
/// Ordinary datasets contribute their y channel. OHLC-capable datasets
/// contribute high and low when `include_interval` is true, and fall back
/// to the y channel otherwise. NaN values are skipped, never propagated.
/// Returns `None` for an empty or all-NaN dataset: nothing to draw, not an
/// error. Deterministic for an unchanged dataset.
pub fn find_range_bounds(dataset: &dyn XyDataset, include_interval: bool) -> Option<Range> {
    let mut bounds: Option<Range> = None;
    if include_interval {
        if let Some(ohlc) = dataset.as_ohlc() {
            for series in 0..ohlc.series_count() {
                for item in 0..ohlc.item_count(series) {
                    bounds = Range::expand_to_include(bounds, ohlc.high_value(series, item));
                    bounds = Range::expand_to_include(bounds, ohlc.low_value(series, item));
                }
            }
            return bounds;
        }
    }
    for series in 0..dataset.series_count() {
        for item in 0..dataset.item_count(series) {
            bounds = Range::expand_to_include(bounds, dataset.y_value(series, item));
        }
    }
    bounds
}

/// Same contract as [`find_range_bounds`], over the x channel.
pub fn find_domain_bounds(dataset: &dyn XyDataset) -> Option<Range> {
    let mut bounds: Option<Range> = None;
    for series in 0..dataset.series_count() {
        for item in 0..dataset.item_count(series) {
            bounds = Range::expand_to_include(bounds, dataset.x_value(series, item));
        }
    }
    bounds
}
