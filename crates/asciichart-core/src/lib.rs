// File: crates/asciichart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building and rendering text charts.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{render, Chart, Frame, RenderOptions, ScaleMode};
pub use series::Series;
pub use axis::{Axis, AxisLayout};
pub use grid::{Cell, Grid};
pub use geometry::{classify, interpolate, interpolate_rows, GridPoint, Slope, Stroke};
pub use scale::{scale, Extent};
pub use theme::Theme;
pub use text::format_label;
pub use error::ChartError;
pub use types::Sample;
