// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for invalid chart configuration.

use thiserror::Error;

/// Errors raised when a chart component is constructed with invalid
/// configuration. Missing data (NaN, empty datasets) is never an error;
/// those cases are skips handled by the rendering pipeline.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ChartError {
    #[error("tick unit size must be positive, got {0}")]
    InvalidTickSize(f64),

    #[error("tick unit source requires at least one candidate size")]
    EmptyTickUnitSource,

    #[error("range requires lower <= upper, got {lower}..{upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("candle violates low <= min(open, close) <= max(open, close) <= high")]
    InvalidCandle,
}
