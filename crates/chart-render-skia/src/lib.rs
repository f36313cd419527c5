// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia-backed DrawSurface with headless PNG export and label text.

use anyhow::Result;
use skia_safe as skia;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{Color, DrawSurface, PlotOrientation, PointF, RectF, Style, XyPlot};

mod text;
pub use text::TextShaper;

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(style: &Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width);
    paint.set_color(to_skia_color(style.color));
    if let Some(dash) = &style.dash {
        if let Some(effect) = skia::PathEffect::dash(dash, 0.0) {
            paint.set_path_effect(effect);
        }
    }
    paint
}

fn fill_paint(style: &Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(style.color));
    paint
}

/// Adapts a Skia canvas to the core's drawing-surface seam.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn draw_line(&mut self, p0: PointF, p1: PointF, style: &Style) {
        self.canvas.draw_line(
            (p0.x as f32, p0.y as f32),
            (p1.x as f32, p1.y as f32),
            &stroke_paint(style),
        );
    }

    fn draw_rect(&mut self, rect: RectF, style: &Style) {
        let r = skia::Rect::from_ltrb(
            rect.left as f32,
            rect.top as f32,
            rect.right as f32,
            rect.bottom as f32,
        );
        self.canvas.draw_rect(r, &fill_paint(style));
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Tick labels involve platform fonts; disable for deterministic output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}

/// Headless renderer: draws a plot onto a CPU raster surface and encodes
/// PNG output.
pub struct PngRenderer {
    shaper: TextShaper,
}

impl PngRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn render_to_bytes(&self, plot: &XyPlot, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        {
            let mut target = SkiaSurface::new(canvas);
            plot.draw(&mut target, opts.width as f64, opts.height as f64, None);
        }
        if opts.draw_labels {
            self.draw_tick_labels(canvas, plot, opts.width as f64, opts.height as f64);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        plot: &XyPlot,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_bytes(plot, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas, plot: &XyPlot, width: f64, height: f64) {
        let layout = plot.layout(width, height);
        let area = layout.area;
        let color = to_skia_color(plot.theme().axis_label);
        let size = 12.0;

        // the domain ticks run along the bottom edge in a vertical plot and
        // down the left edge in a horizontal one; range ticks take the other
        let (bottom_ticks, left_ticks) = match plot.orientation() {
            PlotOrientation::Vertical => (&layout.domain_ticks, &layout.range_ticks),
            PlotOrientation::Horizontal => (&layout.range_ticks, &layout.domain_ticks),
        };

        for tick in bottom_ticks {
            let w = self.shaper.measure_width(&tick.label, size, true);
            self.shaper.draw_left(
                canvas,
                &tick.label,
                tick.coord as f32 - w / 2.0,
                area.bottom as f32 + size + 6.0,
                size,
                color,
                true,
            );
        }
        for tick in left_ticks {
            let w = self.shaper.measure_width(&tick.label, size, true);
            self.shaper.draw_left(
                canvas,
                &tick.label,
                area.left as f32 - w - 8.0,
                tick.coord as f32 + size * 0.35,
                size,
                color,
                true,
            );
        }
    }
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self::new()
    }
}
