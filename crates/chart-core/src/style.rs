// File: crates/chart-core/src/style.rs
// Summary: Opaque paint values, per-series style resolution, and theming.

/// ARGB color, backend-agnostic. The render backend converts this to its
/// native paint type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

/// Paint configuration for one primitive: color, stroke width, and an
/// optional dash pattern (on/off pixel lengths). Lines are stroked;
/// rectangles are filled.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    pub stroke_width: f32,
    pub dash: Option<Vec<f32>>,
}

impl Style {
    pub fn solid(color: Color, stroke_width: f32) -> Self {
        Self { color, stroke_width, dash: None }
    }

    pub fn dashed(color: Color, stroke_width: f32, dash: Vec<f32>) -> Self {
        Self { color, stroke_width, dash: Some(dash) }
    }
}

/// Chart-level color presets.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub series: [Color; 4],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            series: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 200, 64),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            series: [
                Color::from_argb(255, 32, 120, 200),
                Color::from_argb(255, 20, 160, 90),
                Color::from_argb(255, 200, 60, 60),
                Color::from_argb(255, 200, 150, 20),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by name, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

/// Per-series paint resolution: explicit overrides first, then the palette
/// cycled by series index.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyles {
    palette: Vec<Style>,
    overrides: Vec<Option<Style>>,
}

impl SeriesStyles {
    /// Palette must be non-empty; [`SeriesStyles::from_theme`] is the usual
    /// entry point.
    pub fn new(palette: Vec<Style>) -> Self {
        assert!(!palette.is_empty(), "palette must be non-empty");
        Self { palette, overrides: Vec::new() }
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self::new(
            theme
                .series
                .iter()
                .map(|&c| Style::solid(c, 1.0))
                .collect(),
        )
    }

    /// Pin an explicit style for one series.
    pub fn set_series_style(&mut self, series: usize, style: Style) {
        if self.overrides.len() <= series {
            self.overrides.resize(series + 1, None);
        }
        self.overrides[series] = Some(style);
    }

    /// Style for a (series, item) pair. Items within a series share paint;
    /// the item index is accepted for interface stability.
    pub fn item_style(&self, series: usize, _item: usize) -> &Style {
        if let Some(Some(style)) = self.overrides.get(series) {
            return style;
        }
        &self.palette[series % self.palette.len()]
    }
}

impl Default for SeriesStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
