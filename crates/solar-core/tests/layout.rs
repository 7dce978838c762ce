// File: crates/solar-core/tests/layout.rs
// Purpose: Validate chart geometry: scale ceiling, point spacing, tick and label policy.

use solar_core::layout::{is_labeled, label_stride, scale_max, ChartLayout, TICK_COUNT};
use solar_core::types::Insets;

fn layout_for(utility: &[f64], solar: &[f64]) -> ChartLayout {
    ChartLayout::new(800, 500, &Insets::default(), utility, solar)
}

#[test]
fn scale_adds_ten_percent_headroom() {
    assert_eq!(scale_max(&[1800.0, 1962.0], &[1440.0, 1483.2]), 1962.0 * 1.1);
    // tallest value may come from either series
    assert_eq!(scale_max(&[10.0], &[500.0]), 500.0 * 1.1);
}

#[test]
fn all_zero_series_floor_at_one() {
    assert_eq!(scale_max(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), 1.0);
    assert_eq!(scale_max(&[], &[]), 1.0);
    let layout = layout_for(&[0.0, 0.0], &[0.0, 0.0]);
    assert_eq!(layout.max_value, 1.0);
    assert!(layout.max_value.is_finite());
}

#[test]
fn single_point_has_zero_step_on_left_edge() {
    let layout = layout_for(&[1200.0], &[900.0]);
    assert_eq!(layout.points, 1);
    assert_eq!(layout.x_step, 0.0);
    assert_eq!(layout.x_at(0), layout.left);
}

#[test]
fn points_span_the_plot_width() {
    let layout = layout_for(&[1.0; 25], &[1.0; 25]);
    assert_eq!(layout.x_at(0), layout.left);
    let last = layout.x_at(24);
    assert!((last - layout.right).abs() < 1e-3);
}

#[test]
fn value_zero_sits_on_x_axis() {
    let layout = layout_for(&[100.0, 200.0], &[50.0, 60.0]);
    assert_eq!(layout.y_at(0.0), layout.bottom);
    // max_value maps to the top of the plot
    let top = layout.y_at(layout.max_value);
    assert!((top - layout.top).abs() < 1e-3);
}

#[test]
fn six_evenly_spaced_tick_values() {
    let layout = layout_for(&[500.0, 1000.0], &[400.0, 800.0]);
    let ticks = layout.tick_values();
    assert_eq!(ticks.len(), TICK_COUNT + 1);
    assert_eq!(ticks[0], 0.0);
    assert!((ticks[TICK_COUNT] - layout.max_value).abs() < 1e-9);
    let step = layout.max_value / TICK_COUNT as f64;
    for (i, t) in ticks.iter().enumerate() {
        assert!((t - step * i as f64).abs() < 1e-9);
    }
}

#[test]
fn stride_caps_labels_at_ten() {
    assert_eq!(label_stride(1), 1);
    assert_eq!(label_stride(10), 1);
    assert_eq!(label_stride(11), 2);
    assert_eq!(label_stride(37), 4);
    assert_eq!(label_stride(100), 10);

    for count in [1usize, 9, 10, 11, 37, 100, 250] {
        let drawn = (0..count).filter(|&i| is_labeled(i, count)).count();
        // stride bounds on-stride labels at 10; the forced final label may add one
        assert!(drawn <= 11, "count {count} drew {drawn} labels");
    }
}

#[test]
fn final_label_always_drawn() {
    // 36 is off-stride for stride 4, but is the last index
    assert_eq!(label_stride(37), 4);
    assert!(36 % 4 != 0);
    assert!(is_labeled(36, 37));
    assert!(is_labeled(0, 37));
    assert!(!is_labeled(1, 37));
}
