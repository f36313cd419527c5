// File: crates/chart-core/src/renderer.rs
// Summary: High/low/open/close item renderer with connector fallback.

use crate::bounds;
use crate::dataset::XyDataset;
use crate::entity::{EntityCollection, EntityRegion};
use crate::geometry::{PointF, RectF};
use crate::range::Range;
use crate::scale::AxisScale;
use crate::style::{SeriesStyles, Style};
use crate::surface::DrawSurface;
use crate::types::{AxisEdge, PlotOrientation};

/// Entity rectangles are this many device units thick across the body line.
const ENTITY_THICKNESS: f64 = 2.0;

/// Renders one data point as a high-low bar with optional open/close ticks.
///
/// For OHLC-capable datasets (checked via [`XyDataset::as_ohlc`]) each item
/// becomes a line spanning the mapped high-to-low interval, an open tick
/// extending backward and a close tick extending forward from that line.
/// For plain datasets the renderer falls back to connecting consecutive
/// points.
///
/// Configuration is compared structurally and cloning shares no mutable
/// state. Mutating configuration during an in-progress draw pass is not
/// representable: drawing borrows the renderer immutably.
#[derive(Clone, Debug, PartialEq)]
pub struct HighLowRenderer {
    draw_open_ticks: bool,
    draw_close_ticks: bool,
    /// Overrides for the tick strokes; `None` falls back to the series style.
    open_tick_style: Option<Style>,
    close_tick_style: Option<Style>,
    /// Tick length in device units, measured along the domain direction.
    tick_length: f64,
}

impl Default for HighLowRenderer {
    fn default() -> Self {
        Self {
            draw_open_ticks: true,
            draw_close_ticks: true,
            open_tick_style: None,
            close_tick_style: None,
            tick_length: 2.0,
        }
    }
}

impl HighLowRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_open_ticks(&self) -> bool {
        self.draw_open_ticks
    }

    pub fn set_draw_open_ticks(&mut self, draw: bool) {
        self.draw_open_ticks = draw;
    }

    pub fn draw_close_ticks(&self) -> bool {
        self.draw_close_ticks
    }

    pub fn set_draw_close_ticks(&mut self, draw: bool) {
        self.draw_close_ticks = draw;
    }

    pub fn open_tick_style(&self) -> Option<&Style> {
        self.open_tick_style.as_ref()
    }

    pub fn set_open_tick_style(&mut self, style: Option<Style>) {
        self.open_tick_style = style;
    }

    pub fn close_tick_style(&self) -> Option<&Style> {
        self.close_tick_style.as_ref()
    }

    pub fn set_close_tick_style(&mut self, style: Option<Style>) {
        self.close_tick_style = style;
    }

    pub fn tick_length(&self) -> f64 {
        self.tick_length
    }

    pub fn set_tick_length(&mut self, length: f64) {
        self.tick_length = length;
    }

    /// The value range this renderer needs to display `dataset` fully:
    /// high/low channels included when present.
    pub fn find_range_bounds(&self, dataset: &dyn XyDataset) -> Option<Range> {
        bounds::find_range_bounds(dataset, true)
    }

    /// Axis edges implied by the orientation: the domain axis sits on the
    /// bottom edge in a vertical plot and on the left edge in a horizontal
    /// one.
    pub fn axis_edges(orientation: PlotOrientation) -> (AxisEdge, AxisEdge) {
        match orientation {
            PlotOrientation::Vertical => (AxisEdge::Bottom, AxisEdge::Left),
            PlotOrientation::Horizontal => (AxisEdge::Left, AxisEdge::Bottom),
        }
    }

    /// Draw the visual representation of a single (series, item) data point.
    ///
    /// Items whose domain value falls outside the domain axis range are
    /// skipped. NaN channels are skipped individually: a missing high or
    /// low suppresses only the body line, not the open/close ticks. When
    /// `entities` is supplied, a thin rectangle bounding the body line is
    /// registered for hit-testing.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_item(
        &self,
        surface: &mut dyn DrawSurface,
        area: &RectF,
        domain_axis: &AxisScale,
        range_axis: &AxisScale,
        orientation: PlotOrientation,
        styles: &SeriesStyles,
        dataset: &dyn XyDataset,
        series: usize,
        item: usize,
        entities: Option<&mut EntityCollection>,
    ) {
        let x = dataset.x_value(series, item);
        if !domain_axis.range().contains(x) {
            return;
        }
        let (domain_edge, range_edge) = Self::axis_edges(orientation);
        let xx = domain_axis.value_to_device(x, area, domain_edge);
        let item_style = styles.item_style(series, item);

        let mut entity_area: Option<RectF> = None;

        if let Some(ohlc) = dataset.as_ohlc() {
            let y_high = ohlc.high_value(series, item);
            let y_low = ohlc.low_value(series, item);
            if !y_high.is_nan() && !y_low.is_nan() {
                let yy_high = range_axis.value_to_device(y_high, area, range_edge);
                let yy_low = range_axis.value_to_device(y_low, area, range_edge);
                match orientation {
                    PlotOrientation::Horizontal => {
                        surface.draw_line(
                            PointF::new(yy_low, xx),
                            PointF::new(yy_high, xx),
                            item_style,
                        );
                        entity_area = Some(RectF::from_ltwh(
                            yy_low.min(yy_high),
                            xx - ENTITY_THICKNESS / 2.0,
                            (yy_high - yy_low).abs(),
                            ENTITY_THICKNESS,
                        ));
                    }
                    PlotOrientation::Vertical => {
                        surface.draw_line(
                            PointF::new(xx, yy_low),
                            PointF::new(xx, yy_high),
                            item_style,
                        );
                        entity_area = Some(RectF::from_ltwh(
                            xx - ENTITY_THICKNESS / 2.0,
                            yy_low.min(yy_high),
                            ENTITY_THICKNESS,
                            (yy_high - yy_low).abs(),
                        ));
                    }
                }
            }

            // tick direction follows the domain axis direction
            let mut delta = self.tick_length;
            if domain_axis.inverted() {
                delta = -delta;
            }

            if self.draw_open_ticks {
                let y_open = ohlc.open_value(series, item);
                if !y_open.is_nan() {
                    let yy_open = range_axis.value_to_device(y_open, area, range_edge);
                    let style = self.open_tick_style.as_ref().unwrap_or(item_style);
                    match orientation {
                        PlotOrientation::Horizontal => surface.draw_line(
                            PointF::new(yy_open, xx + delta),
                            PointF::new(yy_open, xx),
                            style,
                        ),
                        PlotOrientation::Vertical => surface.draw_line(
                            PointF::new(xx - delta, yy_open),
                            PointF::new(xx, yy_open),
                            style,
                        ),
                    }
                }
            }

            if self.draw_close_ticks {
                let y_close = ohlc.close_value(series, item);
                if !y_close.is_nan() {
                    let yy_close = range_axis.value_to_device(y_close, area, range_edge);
                    let style = self.close_tick_style.as_ref().unwrap_or(item_style);
                    match orientation {
                        PlotOrientation::Horizontal => surface.draw_line(
                            PointF::new(yy_close, xx),
                            PointF::new(yy_close, xx - delta),
                            style,
                        ),
                        PlotOrientation::Vertical => surface.draw_line(
                            PointF::new(xx, yy_close),
                            PointF::new(xx + delta, yy_close),
                            style,
                        ),
                    }
                }
            }
        } else {
            // no OHLC channels: connect this point to its predecessor
            if item == 0 {
                return;
            }
            let x0 = dataset.x_value(series, item - 1);
            let y0 = dataset.y_value(series, item - 1);
            let y = dataset.y_value(series, item);
            if x0.is_nan() || y0.is_nan() || y.is_nan() {
                return;
            }
            let xx0 = domain_axis.value_to_device(x0, area, domain_edge);
            let yy0 = range_axis.value_to_device(y0, area, range_edge);
            let yy = range_axis.value_to_device(y, area, range_edge);
            match orientation {
                PlotOrientation::Horizontal => {
                    surface.draw_line(PointF::new(yy0, xx0), PointF::new(yy, xx), item_style)
                }
                PlotOrientation::Vertical => {
                    surface.draw_line(PointF::new(xx0, yy0), PointF::new(xx, yy), item_style)
                }
            }
        }

        if let (Some(entities), Some(area)) = (entities, entity_area) {
            entities.add(EntityRegion { area, series, item });
        }
    }
}
