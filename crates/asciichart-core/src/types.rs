// File: crates/asciichart-core/src/types.rs
// Summary: Shared types and constants (plot sizes, gutters, terminal width).

/// One data point: (x, y). x is expected to be non-negative.
pub type Sample = (f64, f64);

/// Default drawing width in columns (label gutters excluded).
pub const WIDTH: usize = 58;
/// Default drawing height in rows (axis rule and x-label row excluded).
pub const HEIGHT: usize = 15;

/// Smallest accepted drawing width; x ticks are spaced `width / 5` apart.
pub const MIN_WIDTH: usize = 5;
/// Smallest accepted drawing height; labels divide by `height - 1`.
pub const MIN_HEIGHT: usize = 2;

/// Largest accepted drawing width.
pub const MAX_WIDTH: usize = 1000;
/// Largest accepted drawing height.
pub const MAX_HEIGHT: usize = 1000;

/// Width of a y-axis label column block.
pub const LABEL_WIDTH: usize = 8;

/// Visible columns emitted per row.
pub const TERMINAL_COLUMNS: usize = 80;

/// Columns reserved around the drawing area.
/// Contract: `right` covers the right border and its labels when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gutters {
    pub left: usize,
    pub right: usize,
}

impl Gutters {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
    /// Total horizontal gutter (left + right).
    pub const fn hsum(&self) -> usize { self.left + self.right }

    /// Gutters for a single shared scale.
    pub const fn single() -> Self { Self::new(12, 0) }

    /// Gutters for two independent scales.
    pub const fn dual() -> Self { Self::new(12, 8) }
}
