// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the coordinate and rendering pipeline.

pub mod bounds;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod event;
pub mod geometry;
pub mod plot;
pub mod range;
pub mod renderer;
pub mod scale;
pub mod style;
pub mod surface;
pub mod tick;
pub mod types;

pub use dataset::{Candle, OhlcDataset, OhlcSeriesCollection, XyDataset, XySeriesCollection};
pub use entity::{EntityCollection, EntityRegion};
pub use error::ChartError;
pub use event::{ChangeEvent, ChangeSink, ChangeSource};
pub use geometry::{PointF, RectF};
pub use plot::{PlacedTick, PlotLayout, XyPlot};
pub use range::Range;
pub use renderer::HighLowRenderer;
pub use scale::AxisScale;
pub use style::{Color, SeriesStyles, Style, Theme};
pub use surface::{DrawPrimitive, DrawSurface, RecordingSurface};
pub use tick::{
    DecimalFormat, NumberTickUnit, Tick, TickFormatter, TickLabelFormat, TickUnit,
    TickUnitSource, TimestampFormat,
};
pub use types::{AxisEdge, Insets, PlotOrientation};
