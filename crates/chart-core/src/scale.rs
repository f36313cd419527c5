// File: crates/chart-core/src/scale.rs
// Summary: Bidirectional data<->device mapping for one axis, plus tick selection.

use crate::geometry::RectF;
use crate::range::Range;
use crate::tick::{NumberTickUnit, Tick, TickUnitSource};
use crate::types::AxisEdge;

/// The data-range-to-device-range mapping for one axis.
///
/// The scale owns the data range and the inversion flag; the device extent
/// arrives per call as a data area plus the edge the axis is attached to,
/// so one configured scale can serve several areas in a draw pass.
///
/// Direction rules: axes on the left/right edges flip by default (data
/// increases upward while device y increases downward); `inverted` flips
/// the direction once more on top of that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    range: Range,
    inverted: bool,
}

impl AxisScale {
    pub fn new(range: Range) -> Self {
        Self { range, inverted: false }
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Pixel interval of `area` this axis maps onto for `edge`, as
    /// (low coordinate, high coordinate).
    fn device_extent(area: &RectF, edge: AxisEdge) -> (f64, f64) {
        if edge.is_top_or_bottom() {
            (area.left, area.right)
        } else {
            (area.top, area.bottom)
        }
    }

    fn flipped(&self, edge: AxisEdge) -> bool {
        self.inverted ^ !edge.is_top_or_bottom()
    }

    /// Map a data value to a device coordinate along this axis.
    ///
    /// Values outside the data range extrapolate linearly; callers clip via
    /// `range().contains(..)` before drawing. A zero-width range maps every
    /// value to the center of the extent.
    pub fn value_to_device(&self, value: f64, area: &RectF, edge: AxisEdge) -> f64 {
        let (lo, hi) = Self::device_extent(area, edge);
        let length = self.range.length();
        if length == 0.0 {
            return (lo + hi) / 2.0;
        }
        let frac = (value - self.range.lower()) / length;
        if self.flipped(edge) {
            hi - frac * (hi - lo)
        } else {
            lo + frac * (hi - lo)
        }
    }

    /// Inverse of [`AxisScale::value_to_device`].
    pub fn device_to_value(&self, coord: f64, area: &RectF, edge: AxisEdge) -> f64 {
        let (lo, hi) = Self::device_extent(area, edge);
        if hi == lo {
            return self.range.central_value();
        }
        let frac = if self.flipped(edge) {
            (hi - coord) / (hi - lo)
        } else {
            (coord - lo) / (hi - lo)
        };
        self.range.lower() + frac * self.range.length()
    }

    /// Device-space length of a data-space interval of `size` along `edge`.
    pub fn length_to_device(&self, size: f64, area: &RectF, edge: AxisEdge) -> f64 {
        let (lo, hi) = Self::device_extent(area, edge);
        let length = self.range.length();
        if length == 0.0 {
            return f64::INFINITY;
        }
        (size / length) * (hi - lo).abs()
    }

    /// Choose the smallest candidate unit whose on-screen tick spacing is at
    /// least `target_px_spacing`, falling back to the largest candidate when
    /// none qualifies. Keeps labels dense without overlapping.
    pub fn select_tick_unit(
        &self,
        target_px_spacing: f64,
        area: &RectF,
        edge: AxisEdge,
        source: &TickUnitSource,
    ) -> NumberTickUnit {
        for &size in source.sizes() {
            if self.length_to_device(size, area, edge) >= target_px_spacing {
                return source.unit_for(size);
            }
        }
        source.largest()
    }

    /// Labeled tick positions covering the range at `unit` granularity:
    /// every multiple of the unit size from the first at or above `lower`
    /// through `upper`. A zero-width range yields a single centered tick.
    pub fn ticks(&self, unit: &NumberTickUnit) -> Vec<Tick> {
        let range = self.range;
        if range.length() == 0.0 {
            let value = range.central_value();
            return vec![Tick { value, label: unit.value_to_string(value) }];
        }
        let size = unit.size();
        // tolerance keeps exact-multiple endpoints from dropping out to float noise
        let eps = size * 1e-9;
        let first = ((range.lower() - eps) / size).ceil();
        let last = ((range.upper() + eps) / size).floor();
        let mut ticks = Vec::new();
        let mut index = first;
        while index <= last && ticks.len() < MAX_TICKS {
            let value = index * size;
            // ceil() of a tiny negative leaves -0.0; normalize for labeling
            let value = if value == 0.0 { 0.0 } else { value };
            ticks.push(Tick { value, label: unit.value_to_string(value) });
            index += 1.0;
        }
        ticks
    }
}

/// Hard cap on ticks per axis; a selected unit never comes close, this only
/// guards callers that pass a hand-built unit far smaller than the range.
const MAX_TICKS: usize = 1000;
