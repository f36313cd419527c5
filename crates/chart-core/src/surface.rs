// File: crates/chart-core/src/surface.rs
// Summary: The drawing-surface seam: primitive emission and a recording impl.

use crate::geometry::{PointF, RectF};
use crate::style::Style;

/// A geometric primitive emitted by the rendering pipeline. Consumed
/// immediately by the surface; nothing in the core retains these.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Line { p0: PointF, p1: PointF, style: Style },
    Rect { rect: RectF, style: Style },
}

/// The platform drawing capability the pipeline draws through. Assumed
/// always available: no handshake, no return values, no buffering. Lines
/// are stroked with the style's width/dash; rectangles are filled with the
/// style's color.
pub trait DrawSurface {
    fn draw_line(&mut self, p0: PointF, p1: PointF, style: &Style);
    fn draw_rect(&mut self, rect: RectF, style: &Style);
}

/// A surface that retains every primitive, in emission order. Used by
/// tests and benchmarks to observe pipeline output without a backend.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    primitives: Vec<DrawPrimitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn lines(&self) -> impl Iterator<Item = (&PointF, &PointF, &Style)> {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Line { p0, p1, style } => Some((p0, p1, style)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, p0: PointF, p1: PointF, style: &Style) {
        self.primitives.push(DrawPrimitive::Line { p0, p1, style: style.clone() });
    }

    fn draw_rect(&mut self, rect: RectF, style: &Style) {
        self.primitives.push(DrawPrimitive::Rect { rect, style: style.clone() });
    }
}
