// File: crates/chart-render-skia/src/text.rs
// Summary: Minimal text shaping for axis labels via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const NUMERIC_FAMILIES: &[&str] =
    &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];
const LABEL_FAMILIES: &[&str] =
    &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Shapes and draws short single-line labels. Numeric labels prefer
/// monospaced families so columns of tick labels align.
pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, numeric: bool) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(if numeric { NUMERIC_FAMILIES } else { LABEL_FAMILIES });
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), numeric)
            .longest_line()
    }

    /// Draw with the left edge at `x` and the baseline near `y`.
    pub fn draw_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        numeric: bool,
    ) {
        let paragraph = self.layout(text, size, color, numeric);
        // Paragraph paints from its top-left; shift up by an approximate
        // ascent so `y` behaves like a baseline.
        paragraph.paint(canvas, (x, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
