// File: crates/solar-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

/// Alpha for the filled area under each series line (20% of opaque).
pub const AREA_ALPHA: u8 = 51;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub legend_text: skia::Color,
    pub utility: skia::Color,
    pub solar: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            tick_label: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            legend_text: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            utility: skia::Color::from_argb(255, 0xe5, 0x39, 0x35),
            solar: skia::Color::from_argb(255, 0x2e, 0x7d, 0x32),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            utility: skia::Color::from_argb(255, 0xef, 0x53, 0x50),
            solar: skia::Color::from_argb(255, 0x66, 0xbb, 0x6a),
        }
    }

    /// Series fill color for the area under a line.
    pub fn area_fill(series_color: skia::Color) -> skia::Color {
        skia::Color::from_argb(AREA_ALPHA, series_color.r(), series_color.g(), series_color.b())
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
