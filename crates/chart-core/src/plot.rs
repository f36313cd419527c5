// File: crates/chart-core/src/plot.rs
// Summary: Plot composition: bounds -> axes -> gridlines -> item loop.

use crate::bounds;
use crate::dataset::XyDataset;
use crate::entity::EntityCollection;
use crate::event::{notify, ChangeSink, ChangeSource};
use crate::geometry::{PointF, RectF};
use crate::range::Range;
use crate::renderer::HighLowRenderer;
use crate::scale::AxisScale;
use crate::style::{SeriesStyles, Style, Theme};
use crate::surface::DrawSurface;
use crate::tick::TickUnitSource;
use crate::types::{Insets, PlotOrientation};

/// Target on-screen spacing between labeled domain ticks.
const DOMAIN_TICK_SPACING_PX: f64 = 80.0;
/// Target on-screen spacing between labeled range ticks.
const RANGE_TICK_SPACING_PX: f64 = 48.0;
/// Fraction of the value span added above and below auto-ranged axes.
const RANGE_MARGIN: f64 = 0.02;

/// A tick placed at a device coordinate along its axis edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    pub coord: f64,
    pub label: String,
}

/// Resolved per-frame layout: the data area and the placed ticks for both
/// axes. Backends use this to draw tick labels next to the area the core
/// has already drawn into.
#[derive(Clone, Debug)]
pub struct PlotLayout {
    pub area: RectF,
    pub domain_ticks: Vec<PlacedTick>,
    pub range_ticks: Vec<PlacedTick>,
}

/// Owns one dataset, two axis scales, a renderer, and styling, and runs
/// the full draw pass against a caller-supplied surface.
///
/// Configuration mutation happens through `&mut self` setters while
/// drawing borrows `&self`, so a configuration cannot change under an
/// in-progress pass from safe code. Setters push a [`ChangeEvent`] into
/// the attached sink, if any.
///
/// [`ChangeEvent`]: crate::event::ChangeEvent
pub struct XyPlot {
    dataset: Box<dyn XyDataset>,
    renderer: HighLowRenderer,
    domain_axis: AxisScale,
    range_axis: AxisScale,
    auto_domain: bool,
    auto_range: bool,
    orientation: PlotOrientation,
    insets: Insets,
    theme: Theme,
    styles: SeriesStyles,
    domain_tick_source: TickUnitSource,
    range_tick_source: TickUnitSource,
    events: Option<ChangeSink>,
}

impl XyPlot {
    pub fn new(dataset: Box<dyn XyDataset>) -> Self {
        let theme = Theme::default();
        let styles = SeriesStyles::from_theme(&theme);
        Self {
            dataset,
            renderer: HighLowRenderer::new(),
            domain_axis: AxisScale::new(Range::new_unchecked(0.0, 1.0)),
            range_axis: AxisScale::new(Range::new_unchecked(0.0, 1.0)),
            auto_domain: true,
            auto_range: true,
            orientation: PlotOrientation::Vertical,
            insets: Insets::default(),
            theme,
            styles,
            domain_tick_source: TickUnitSource::standard(),
            range_tick_source: TickUnitSource::standard(),
            events: None,
        }
    }

    pub fn renderer(&self) -> &HighLowRenderer {
        &self.renderer
    }

    pub fn orientation(&self) -> PlotOrientation {
        self.orientation
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Route configuration-change notifications into `sink`.
    pub fn set_change_sink(&mut self, sink: ChangeSink) {
        self.events = Some(sink);
    }

    pub fn set_dataset(&mut self, dataset: Box<dyn XyDataset>) {
        self.dataset = dataset;
        notify(&self.events, ChangeSource::Dataset);
    }

    pub fn set_orientation(&mut self, orientation: PlotOrientation) {
        self.orientation = orientation;
        notify(&self.events, ChangeSource::Plot);
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        notify(&self.events, ChangeSource::Plot);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.styles = SeriesStyles::from_theme(&theme);
        self.theme = theme;
        notify(&self.events, ChangeSource::Plot);
    }

    pub fn set_series_style(&mut self, series: usize, style: Style) {
        self.styles.set_series_style(series, style);
        notify(&self.events, ChangeSource::Plot);
    }

    /// Fix the domain range, disabling auto-ranging from the dataset.
    pub fn set_domain_range(&mut self, range: Range) {
        self.domain_axis.set_range(range);
        self.auto_domain = false;
        notify(&self.events, ChangeSource::Axis);
    }

    /// Fix the value range, disabling auto-ranging from the dataset.
    pub fn set_value_range(&mut self, range: Range) {
        self.range_axis.set_range(range);
        self.auto_range = false;
        notify(&self.events, ChangeSource::Axis);
    }

    pub fn set_domain_inverted(&mut self, inverted: bool) {
        self.domain_axis.set_inverted(inverted);
        notify(&self.events, ChangeSource::Axis);
    }

    pub fn set_range_inverted(&mut self, inverted: bool) {
        self.range_axis.set_inverted(inverted);
        notify(&self.events, ChangeSource::Axis);
    }

    /// Replace the candidate tick units (and label format) of the domain
    /// axis, e.g. epoch-second ladders with timestamp labels.
    pub fn set_domain_tick_source(&mut self, source: TickUnitSource) {
        self.domain_tick_source = source;
        notify(&self.events, ChangeSource::Axis);
    }

    pub fn set_range_tick_source(&mut self, source: TickUnitSource) {
        self.range_tick_source = source;
        notify(&self.events, ChangeSource::Axis);
    }

    /// Mutate the renderer configuration and emit one change event.
    pub fn update_renderer(&mut self, f: impl FnOnce(&mut HighLowRenderer)) {
        f(&mut self.renderer);
        notify(&self.events, ChangeSource::Renderer);
    }

    /// Data area left after applying the insets to the surface size.
    fn data_area(&self, width: f64, height: f64) -> RectF {
        RectF::from_ltrb(
            self.insets.left as f64,
            self.insets.top as f64,
            width - self.insets.right as f64,
            height - self.insets.bottom as f64,
        )
    }

    /// Effective axes for one frame: auto-ranged axes take aggregator
    /// bounds (value axis padded by a small margin), fixed axes keep their
    /// configured range. Absent bounds leave the configured range in place.
    fn effective_axes(&self) -> (AxisScale, AxisScale) {
        let mut domain = self.domain_axis;
        let mut range = self.range_axis;
        if self.auto_domain {
            if let Some(b) = bounds::find_domain_bounds(self.dataset.as_ref()) {
                domain.set_range(b);
            }
        }
        if self.auto_range {
            if let Some(b) = self.renderer.find_range_bounds(self.dataset.as_ref()) {
                let margin = b.length() * RANGE_MARGIN;
                range.set_range(Range::new_unchecked(b.lower() - margin, b.upper() + margin));
            }
        }
        (domain, range)
    }

    /// Resolve the per-frame layout without drawing.
    pub fn layout(&self, width: f64, height: f64) -> PlotLayout {
        let area = self.data_area(width, height);
        let (domain, range) = self.effective_axes();
        let (domain_edge, range_edge) = HighLowRenderer::axis_edges(self.orientation);

        let domain_unit = domain.select_tick_unit(
            DOMAIN_TICK_SPACING_PX,
            &area,
            domain_edge,
            &self.domain_tick_source,
        );
        let range_unit = range.select_tick_unit(
            RANGE_TICK_SPACING_PX,
            &area,
            range_edge,
            &self.range_tick_source,
        );

        let domain_ticks = domain
            .ticks(&domain_unit)
            .into_iter()
            .map(|t| PlacedTick {
                coord: domain.value_to_device(t.value, &area, domain_edge),
                label: t.label,
            })
            .collect();
        let range_ticks = range
            .ticks(&range_unit)
            .into_iter()
            .map(|t| PlacedTick {
                coord: range.value_to_device(t.value, &area, range_edge),
                label: t.label,
            })
            .collect();

        PlotLayout { area, domain_ticks, range_ticks }
    }

    /// Run one full draw pass: background, gridlines at tick positions,
    /// axis lines, then every (series, item) through the renderer. When
    /// `entities` is supplied it collects one hit-test region per drawn
    /// body line.
    pub fn draw(
        &self,
        surface: &mut dyn DrawSurface,
        width: f64,
        height: f64,
        mut entities: Option<&mut EntityCollection>,
    ) {
        let layout = self.layout(width, height);
        let area = layout.area;
        let (domain, range) = self.effective_axes();
        let (domain_edge, _) = HighLowRenderer::axis_edges(self.orientation);

        // background
        let bg = Style::solid(self.theme.background, 1.0);
        surface.draw_rect(RectF::from_ltwh(0.0, 0.0, width, height), &bg);

        // gridlines at labeled tick positions
        let grid = Style::solid(self.theme.grid, 1.0);
        let domain_runs_x = domain_edge.is_top_or_bottom();
        for tick in &layout.domain_ticks {
            if domain_runs_x {
                surface.draw_line(
                    PointF::new(tick.coord, area.top),
                    PointF::new(tick.coord, area.bottom),
                    &grid,
                );
            } else {
                surface.draw_line(
                    PointF::new(area.left, tick.coord),
                    PointF::new(area.right, tick.coord),
                    &grid,
                );
            }
        }
        for tick in &layout.range_ticks {
            if domain_runs_x {
                surface.draw_line(
                    PointF::new(area.left, tick.coord),
                    PointF::new(area.right, tick.coord),
                    &grid,
                );
            } else {
                surface.draw_line(
                    PointF::new(tick.coord, area.top),
                    PointF::new(tick.coord, area.bottom),
                    &grid,
                );
            }
        }

        // axis lines along the bottom and left edges of the data area
        let axis_line = Style::solid(self.theme.axis_line, 1.5);
        surface.draw_line(
            PointF::new(area.left, area.bottom),
            PointF::new(area.right, area.bottom),
            &axis_line,
        );
        surface.draw_line(
            PointF::new(area.left, area.top),
            PointF::new(area.left, area.bottom),
            &axis_line,
        );

        // items
        let dataset = self.dataset.as_ref();
        for series in 0..dataset.series_count() {
            for item in 0..dataset.item_count(series) {
                self.renderer.draw_item(
                    surface,
                    &area,
                    &domain,
                    &range,
                    self.orientation,
                    &self.styles,
                    dataset,
                    series,
                    item,
                    entities.as_deref_mut(),
                );
            }
        }
    }
}
