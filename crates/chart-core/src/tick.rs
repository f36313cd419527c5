// File: crates/chart-core/src/tick.rs
// Summary: Tick units, label formatting, and the standard 1-2-5 unit ladder.

use crate::error::ChartError;

/// Label formatting capability injected into an axis. Implementations must
/// be pure: the output depends only on `value` and the formatter's own
/// configuration.
pub trait TickFormatter {
    fn format_value(&self, value: f64) -> String;
}

/// Fixed-decimal numeric formatter with optional thousands grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalFormat {
    fraction_digits: usize,
    grouped: bool,
}

impl DecimalFormat {
    pub fn new(fraction_digits: usize) -> Self {
        Self { fraction_digits, grouped: false }
    }

    /// Same as [`DecimalFormat::new`] but with thousands separators,
    /// e.g. `12,500`.
    pub fn grouped(fraction_digits: usize) -> Self {
        Self { fraction_digits, grouped: true }
    }
}

impl TickFormatter for DecimalFormat {
    fn format_value(&self, value: f64) -> String {
        let raw = format!("{:.*}", self.fraction_digits, value);
        if !self.grouped {
            return raw;
        }
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw.as_str(), None),
        };
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(d) => ("-", d),
            None => ("", int_part),
        };
        let mut grouped = String::with_capacity(raw.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        match frac_part {
            Some(f) => format!("{sign}{grouped}.{f}"),
            None => format!("{sign}{grouped}"),
        }
    }
}

/// Formats a value interpreted as Unix epoch seconds, for time-domain axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampFormat {
    pattern: String,
}

impl TimestampFormat {
    /// `pattern` is a chrono strftime pattern, e.g. `"%Y-%m-%d"`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

impl TickFormatter for TimestampFormat {
    fn format_value(&self, value: f64) -> String {
        match chrono::DateTime::from_timestamp(value as i64, 0) {
            Some(dt) => dt.format(&self.pattern).to_string(),
            // out of chrono's representable span: fall back to the raw number
            None => format!("{value}"),
        }
    }
}

/// Closed set of formatter variants, so tick units stay structurally
/// comparable while the formatting capability remains swappable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickLabelFormat {
    Decimal(DecimalFormat),
    Timestamp(TimestampFormat),
}

impl TickFormatter for TickLabelFormat {
    fn format_value(&self, value: f64) -> String {
        match self {
            TickLabelFormat::Decimal(f) => f.format_value(value),
            TickLabelFormat::Timestamp(f) => f.format_value(value),
        }
    }
}

/// The data-value increment between labeled gridlines, plus the number of
/// unlabeled minor ticks between consecutive major ticks. Immutable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickUnit {
    size: f64,
    minor_tick_count: u32,
}

impl TickUnit {
    /// Rejects non-positive (or NaN) sizes; callers are expected to catch
    /// the error and substitute a default unit.
    pub fn new(size: f64, minor_tick_count: u32) -> Result<Self, ChartError> {
        if !(size > 0.0) {
            return Err(ChartError::InvalidTickSize(size));
        }
        Ok(Self { size, minor_tick_count })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn minor_tick_count(&self) -> u32 {
        self.minor_tick_count
    }
}

/// A tick unit that can turn its tick values into labels.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberTickUnit {
    unit: TickUnit,
    format: TickLabelFormat,
}

impl NumberTickUnit {
    pub fn new(size: f64, format: TickLabelFormat) -> Result<Self, ChartError> {
        Ok(Self { unit: TickUnit::new(size, 0)?, format })
    }

    pub fn with_minor_count(
        size: f64,
        format: TickLabelFormat,
        minor_tick_count: u32,
    ) -> Result<Self, ChartError> {
        Ok(Self { unit: TickUnit::new(size, minor_tick_count)?, format })
    }

    pub fn size(&self) -> f64 {
        self.unit.size()
    }

    pub fn minor_tick_count(&self) -> u32 {
        self.unit.minor_tick_count()
    }

    /// Pure function of `value` and the unit's formatter configuration.
    pub fn value_to_string(&self, value: f64) -> String {
        self.format.format_value(value)
    }
}

/// One labeled gridline position produced by an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// An ordered set of candidate tick sizes an axis selects from, with an
/// optional label format shared by every produced unit (sized decimal
/// formatting otherwise).
#[derive(Clone, Debug, PartialEq)]
pub struct TickUnitSource {
    sizes: Vec<f64>,
    format: Option<TickLabelFormat>,
}

impl TickUnitSource {
    /// `sizes` must be non-empty and strictly positive; they are sorted on
    /// construction.
    pub fn new(sizes: Vec<f64>) -> Result<Self, ChartError> {
        Self::build(sizes, None)
    }

    /// Like [`TickUnitSource::new`], labeling every unit through `format`
    /// instead of magnitude-sized decimals. The usual route to timestamped
    /// domain axes.
    pub fn with_format(sizes: Vec<f64>, format: TickLabelFormat) -> Result<Self, ChartError> {
        Self::build(sizes, Some(format))
    }

    fn build(mut sizes: Vec<f64>, format: Option<TickLabelFormat>) -> Result<Self, ChartError> {
        if sizes.is_empty() {
            return Err(ChartError::EmptyTickUnitSource);
        }
        for &s in &sizes {
            if !(s > 0.0) {
                return Err(ChartError::InvalidTickSize(s));
            }
        }
        sizes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Ok(Self { sizes, format })
    }

    /// The default 1-2-5 ladder spanning 1e-4 .. 5e7.
    pub fn standard() -> Self {
        let mut sizes = Vec::with_capacity(36);
        let mut magnitude = 1e-4;
        for _ in 0..12 {
            sizes.push(magnitude);
            sizes.push(magnitude * 2.0);
            sizes.push(magnitude * 5.0);
            magnitude *= 10.0;
        }
        Self { sizes, format: None }
    }

    /// Candidate sizes in ascending order.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn smallest(&self) -> NumberTickUnit {
        self.unit_for(self.sizes[0])
    }

    pub fn largest(&self) -> NumberTickUnit {
        self.unit_for(self.sizes[self.sizes.len() - 1])
    }

    /// Build a unit for one of this source's sizes. Without an explicit
    /// format, decimal places are matched to the size's magnitude.
    pub fn unit_for(&self, size: f64) -> NumberTickUnit {
        let format = match &self.format {
            Some(format) => format.clone(),
            None => {
                let digits = if size >= 1.0 {
                    0
                } else {
                    (-size.log10().floor()).min(10.0) as usize
                };
                TickLabelFormat::Decimal(DecimalFormat::new(digits))
            }
        };
        NumberTickUnit {
            // size comes from a validated candidate list
            unit: TickUnit { size, minor_tick_count: 0 },
            format,
        }
    }
}

impl Default for TickUnitSource {
    fn default() -> Self {
        Self::standard()
    }
}
