// File: crates/solar-core/src/chart.rs
// Summary: Dual-series line/area cost chart rendered headlessly via Skia CPU raster surfaces.

use skia_safe as skia;
use thiserror::Error;

use crate::format::format_usd_tick;
use crate::layout::{is_labeled, ChartLayout};
use crate::projection::ProjectionResult;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const AXIS_STROKE: f32 = 1.0;
const SERIES_STROKE: f32 = 2.0;
const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 12.0;
const LEGEND_FONT: f32 = 13.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_LINE_HEIGHT: f32 = 18.0;
const LEGEND_WIDTH: f32 = 120.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to encode chart as PNG")]
    PngEncode,
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable for pixel-exact tests; text shaping varies across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Utility-vs-solar annual cost chart. Stateless: every render call clears
/// the surface and redraws everything from the data held here.
pub struct CostChart {
    pub labels: Vec<String>,
    pub utility: Vec<f64>,
    pub solar: Vec<f64>,
}

impl CostChart {
    pub fn new(labels: Vec<String>, utility: Vec<f64>, solar: Vec<f64>) -> Self {
        Self { labels, utility, solar }
    }

    pub fn from_projection(result: &ProjectionResult) -> Self {
        Self::new(result.labels(), result.utility_annual(), result.solar_annual())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.raster_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.raster_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn raster_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(RenderError::Surface {
            width: opts.width,
            height: opts.height,
        })
    }

    /// Full redraw: clear, axes, ticks, labels, areas, lines, legend.
    /// Draw order keeps the solar line clear of the utility fill.
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let layout =
            ChartLayout::new(opts.width, opts.height, &opts.insets, &self.utility, &self.solar);
        let shaper = opts.draw_labels.then(TextShaper::new);

        self.draw_axes(canvas, &layout, theme, shaper.as_ref());
        self.draw_x_labels(canvas, &layout, theme, shaper.as_ref());

        draw_area(canvas, &layout, &self.utility, theme.utility);
        draw_polyline(canvas, &layout, &self.utility, theme.utility);
        draw_area(canvas, &layout, &self.solar, theme.solar);
        draw_polyline(canvas, &layout, &self.solar, theme.solar);

        self.draw_legend(canvas, &layout, theme, shaper.as_ref());
    }

    fn draw_axes(
        &self,
        canvas: &skia::Canvas,
        layout: &ChartLayout,
        theme: &Theme,
        shaper: Option<&TextShaper>,
    ) {
        let mut axis = skia::Paint::default();
        axis.set_color(theme.axis_line);
        axis.set_anti_alias(true);
        axis.set_style(skia::paint::Style::Stroke);
        axis.set_stroke_width(AXIS_STROKE);

        // Y and X axis lines, anchored at the margin
        canvas.draw_line((layout.left, layout.top), (layout.left, layout.bottom), &axis);
        canvas.draw_line((layout.left, layout.bottom), (layout.right, layout.bottom), &axis);

        // Tick marks and currency labels from 0 to max_value
        for value in layout.tick_values() {
            let y = layout.y_at(value);
            canvas.draw_line((layout.left - TICK_LEN, y), (layout.left, y), &axis);
            if let Some(sh) = shaper {
                sh.draw_right(
                    canvas,
                    &format_usd_tick(value),
                    layout.left - TICK_LEN * 2.0,
                    y,
                    TICK_FONT,
                    theme.tick_label,
                    true,
                );
            }
        }
    }

    fn draw_x_labels(
        &self,
        canvas: &skia::Canvas,
        layout: &ChartLayout,
        theme: &Theme,
        shaper: Option<&TextShaper>,
    ) {
        let Some(sh) = shaper else { return };
        let n = self.labels.len();
        for (i, label) in self.labels.iter().enumerate() {
            if is_labeled(i, n) {
                sh.draw_centered(
                    canvas,
                    label,
                    layout.x_at(i),
                    layout.bottom + TICK_LEN,
                    LABEL_FONT,
                    theme.tick_label,
                    false,
                );
            }
        }
    }

    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        layout: &ChartLayout,
        theme: &Theme,
        shaper: Option<&TextShaper>,
    ) {
        let lx = layout.right - LEGEND_WIDTH;
        let ly = layout.top;

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Fill);

        let entries = [(theme.utility, "Utility Cost"), (theme.solar, "Solar Cost")];
        for (row, (color, label)) in entries.iter().enumerate() {
            let y = ly + LEGEND_LINE_HEIGHT * row as f32;
            swatch.set_color(*color);
            canvas.draw_rect(
                skia::Rect::from_xywh(lx, y, LEGEND_SWATCH, LEGEND_SWATCH),
                &swatch,
            );
            if let Some(sh) = shaper {
                sh.draw_left(
                    canvas,
                    label,
                    lx + LEGEND_SWATCH + 6.0,
                    y + LEGEND_SWATCH * 0.5,
                    LEGEND_FONT,
                    theme.legend_text,
                    false,
                );
            }
        }
    }
}

// ---- series drawing ---------------------------------------------------------

fn series_path(layout: &ChartLayout, data: &[f64]) -> Option<skia::Path> {
    if data.len() < 2 {
        // A single point plots on the left edge with no connecting segment.
        return None;
    }
    let mut path = skia::Path::new();
    path.move_to((layout.x_at(0), layout.y_at(data[0])));
    for (i, &v) in data.iter().enumerate().skip(1) {
        path.line_to((layout.x_at(i), layout.y_at(v)));
    }
    Some(path)
}

fn draw_polyline(canvas: &skia::Canvas, layout: &ChartLayout, data: &[f64], color: skia::Color) {
    let Some(path) = series_path(layout, data) else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(SERIES_STROKE);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

fn draw_area(canvas: &skia::Canvas, layout: &ChartLayout, data: &[f64], color: skia::Color) {
    let Some(mut path) = series_path(layout, data) else { return };

    // Close the shape down to the x-axis
    path.line_to((layout.x_at(data.len() - 1), layout.bottom));
    path.line_to((layout.left, layout.bottom));
    path.close();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(Theme::area_fill(color));

    canvas.draw_path(&path, &fill);
}
