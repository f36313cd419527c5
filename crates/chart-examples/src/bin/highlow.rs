// File: crates/chart-examples/src/bin/highlow.rs
// Summary: Renders a high-low chart to PNG, from a CSV file or synthetic data.

use anyhow::{Context, Result};
use chart_core::{
    Candle, OhlcSeriesCollection, TickLabelFormat, TickUnitSource, TimestampFormat, XyPlot,
};
use chart_render_skia::{PngRenderer, RenderOptions};

const DAY: f64 = 86_400.0;
/// 2024-01-01T00:00:00Z, the start of the synthetic series.
const EPOCH_START: f64 = 1_704_067_200.0;

/// Expected CSV columns: x,open,high,low,close. The first row is treated
/// as a header and skipped.
fn load_candles_csv(path: &str) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path).with_context(|| format!("open {path}"))?;
    let mut candles = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| -> Result<f64> {
            record
                .get(i)
                .with_context(|| format!("missing column {i}"))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("bad number in column {i}"))
        };
        candles.push(
            Candle::try_new(field(0)?, field(1)?, field(2)?, field(3)?, field(4)?)
                .context("invalid OHLC row")?,
        );
    }
    Ok(candles)
}

/// Deterministic pseudo-random walk, so the example needs no input file.
fn synthetic_candles(n: usize) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(n);
    let mut price = 100.0f64;
    let mut seed = 0x2545f491u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        (seed as f64 / u32::MAX as f64) - 0.5
    };
    for i in 0..n {
        let open = price;
        let close = open + next() * 4.0;
        let high = open.max(close) + next().abs() * 2.0;
        let low = open.min(close) - next().abs() * 2.0;
        price = close;
        candles.push(Candle { x: EPOCH_START + i as f64 * DAY, open, high, low, close });
    }
    candles
}

fn main() -> Result<()> {
    let candles = match std::env::args().nth(1) {
        Some(path) => load_candles_csv(&path)?,
        None => synthetic_candles(120),
    };

    let mut dataset = OhlcSeriesCollection::new();
    dataset.add_series(candles);

    let mut plot = XyPlot::new(Box::new(dataset));
    plot.update_renderer(|r| r.set_tick_length(3.0));
    // domain values are epoch seconds; pick day-scale units with date labels
    plot.set_domain_tick_source(TickUnitSource::with_format(
        vec![DAY, 2.0 * DAY, 7.0 * DAY, 14.0 * DAY, 30.0 * DAY, 90.0 * DAY],
        TickLabelFormat::Timestamp(TimestampFormat::new("%m-%d")),
    )?);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_highlow.png");
    PngRenderer::new().render_to_png(&plot, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
