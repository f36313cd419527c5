// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test through the Skia backend.

use chart_core::{Candle, OhlcSeriesCollection, XyPlot};
use chart_render_skia::{PngRenderer, RenderOptions};

fn sample_plot() -> XyPlot {
    let mut dataset = OhlcSeriesCollection::new();
    dataset.add_series(vec![
        Candle { x: 0.0, open: 2.0, high: 3.0, low: 1.0, close: 2.5 },
        Candle { x: 1.0, open: 2.5, high: 3.5, low: 2.0, close: 2.0 },
        Candle { x: 2.0, open: 2.0, high: 4.0, low: 1.5, close: 3.0 },
    ]);
    XyPlot::new(Box::new(dataset))
}

#[test]
fn render_smoke_png() {
    let plot = sample_plot();
    let opts = RenderOptions {
        width: 320,
        height: 240,
        draw_labels: false, // avoid font variance
    };
    let bytes = PngRenderer::new()
        .render_to_bytes(&plot, &opts)
        .expect("render should succeed");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (320, 240));

    // background must be opaque
    assert_eq!(img.get_pixel(0, 0).0[3], 255);
}

#[test]
fn render_to_file_writes_nonempty_png() {
    let plot = sample_plot();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let out = std::path::PathBuf::from("target/test_out/highlow_smoke.png");
    PngRenderer::new()
        .render_to_png(&plot, &opts, &out)
        .expect("render to file");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
