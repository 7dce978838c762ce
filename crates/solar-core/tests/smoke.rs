// File: crates/solar-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use solar_core::{project, CostChart, ProjectionInput, RenderOptions};

#[test]
fn render_smoke_png() {
    let result = project(&ProjectionInput::new(150.0, 120.0, 20, 0.029));
    let chart = CostChart::from_projection(&result);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_single_point_does_not_fail() {
    // One projected year: a single point on the left edge, no line segment
    let result = project(&ProjectionInput::new(150.0, 120.0, 1, 0.029));
    let chart = CostChart::from_projection(&result);
    let opts = RenderOptions::default();
    chart.render_to_png_bytes(&opts).expect("single point renders");
}

#[test]
fn render_empty_series_does_not_fail() {
    // Zero-year horizon: axes, ticks, and legend only
    let result = project(&ProjectionInput::new(150.0, 120.0, 0, 0.029));
    assert!(result.series.is_empty());
    let chart = CostChart::from_projection(&result);
    let opts = RenderOptions::default();
    chart.render_to_png_bytes(&opts).expect("empty chart renders");
}

#[test]
fn rerender_is_idempotent() {
    let result = project(&ProjectionInput::new(150.0, 120.0, 10, 0.029));
    let chart = CostChart::from_projection(&result);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let first = chart.render_to_png_bytes(&opts).expect("first render");
    let second = chart.render_to_png_bytes(&opts).expect("second render");
    assert_eq!(first, second, "back-to-back renders must be identical");
}
