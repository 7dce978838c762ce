// File: crates/solar-core/src/lib.rs
// Summary: Core library entry point; exports the projection engine and chart renderer.

pub mod projection;
pub mod format;
pub mod layout;
pub mod chart;
pub mod theme;
pub mod text;
pub mod types;

pub use chart::{CostChart, RenderError, RenderOptions};
pub use format::{format_usd, format_usd_tick};
pub use layout::ChartLayout;
pub use projection::{
    project, FinalYearSnapshot, ProjectionInput, ProjectionResult, YearlyCost, UTILITY_RATE,
};
pub use text::TextShaper;
pub use theme::Theme;
