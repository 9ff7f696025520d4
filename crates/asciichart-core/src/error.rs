// File: crates/asciichart-core/src/error.rs
// Summary: Errors that abort a render before any grid is drawn.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("dual-scale mode requires exactly two datasets, got {found}")]
    DualSeriesCount { found: usize },
    #[error("plot area {width}x{height} is too small (minimum {min_width}x{min_height})")]
    PlotTooSmall { width: usize, height: usize, min_width: usize, min_height: usize },
    #[error("plot area {width}x{height} is too large (maximum {max_width}x{max_height})")]
    PlotTooLarge { width: usize, height: usize, max_width: usize, max_height: usize },
}
