// File: crates/solar-core/src/layout.rs
// Summary: Plot-rect geometry and value/index scale transforms for the cost chart.

use crate::types::Insets;

/// Number of y-axis divisions; tick values run 0..=TICK_COUNT inclusive.
pub const TICK_COUNT: usize = 5;
/// Upper bound on rendered x-axis labels.
pub const MAX_X_LABELS: usize = 10;
/// Vertical headroom above the tallest series value.
pub const HEADROOM: f64 = 1.1;

/// Resolved chart geometry for one render pass. Pure pixel math; holds no
/// reference to any drawing surface.
#[derive(Clone, Copy, Debug)]
pub struct ChartLayout {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Vertical scale ceiling; always >= 1.0.
    pub max_value: f64,
    /// Horizontal spacing between adjacent points; 0.0 when there is at most
    /// one point (a single point sits on the left edge).
    pub x_step: f32,
    pub points: usize,
}

impl ChartLayout {
    pub fn new(width: i32, height: i32, insets: &Insets, utility: &[f64], solar: &[f64]) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width - insets.right as i32) as f32;
        let bottom = (height - insets.bottom as i32) as f32;
        let points = utility.len().max(solar.len());
        let x_step = if points > 1 {
            (right - left) / (points - 1) as f32
        } else {
            0.0
        };
        Self {
            left,
            top,
            right,
            bottom,
            max_value: scale_max(utility, solar),
            x_step,
            points,
        }
    }

    /// Pixel x of the point at `index`.
    #[inline]
    pub fn x_at(&self, index: usize) -> f32 {
        self.left + self.x_step * index as f32
    }

    /// Pixel y of a dollar `value`; the x-axis is value 0.
    #[inline]
    pub fn y_at(&self, value: f64) -> f32 {
        self.bottom - ((value / self.max_value) * (self.bottom - self.top) as f64) as f32
    }

    /// Evenly spaced tick values from 0 to `max_value` inclusive.
    pub fn tick_values(&self) -> Vec<f64> {
        (0..=TICK_COUNT)
            .map(|i| self.max_value / TICK_COUNT as f64 * i as f64)
            .collect()
    }
}

/// Vertical scale ceiling: largest value across both series plus 10% headroom,
/// floored at 1.0 so empty or all-zero data still yields a usable scale.
pub fn scale_max(utility: &[f64], solar: &[f64]) -> f64 {
    let max = utility
        .iter()
        .chain(solar)
        .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if max.is_finite() && max > 0.0 {
        max * HEADROOM
    } else {
        1.0
    }
}

/// Stride between rendered x-axis labels so that at most [`MAX_X_LABELS`]
/// appear: `max(1, ceil(count / MAX_X_LABELS))`.
pub fn label_stride(count: usize) -> usize {
    ((count + MAX_X_LABELS - 1) / MAX_X_LABELS).max(1)
}

/// Whether the label at `index` is rendered. The final label is always drawn
/// even when it falls off-stride.
pub fn is_labeled(index: usize, count: usize) -> bool {
    count > 0 && (index % label_stride(count) == 0 || index == count - 1)
}
