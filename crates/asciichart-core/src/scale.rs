// File: crates/asciichart-core/src/scale.rs
// Summary: Projection of raw samples onto integer grid coordinates.

use crate::geometry::GridPoint;
use crate::types::Sample;

/// Per-axis maxima a dataset is projected against.
///
/// A zero maximum on either axis collapses every projected point to the
/// origin instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub const fn new(max_x: f64, max_y: f64) -> Self {
        Self { max_x, max_y }
    }

    /// Maxima of one dataset; `(1, 1)` when it is empty.
    pub fn of(data: &[Sample]) -> Self {
        Self::of_all(std::iter::once(data))
    }

    /// Maxima across several datasets; `(1, 1)` when they hold no samples.
    pub fn of_all<'a>(datasets: impl IntoIterator<Item = &'a [Sample]>) -> Self {
        let mut any = false;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(x, y) in datasets.into_iter().flatten() {
            any = true;
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        if any { Self::new(max_x, max_y) } else { Self::new(1.0, 1.0) }
    }

    /// Limit `max_y` to `cap`.
    pub fn capped(self, cap: f64) -> Self {
        Self { max_y: self.max_y.min(cap), ..self }
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        self.max_x == 0.0 || self.max_y == 0.0
    }

    /// Project one sample into a `width` x `height` drawing area.
    #[inline]
    pub fn project(&self, (x, y): Sample, width: usize, height: usize) -> GridPoint {
        if self.is_degenerate() {
            return GridPoint::ORIGIN;
        }
        let col = (x / self.max_x * (width as f64 - 1.0)).round();
        let row = (y / self.max_y * (height as f64 - 1.0)).round();
        GridPoint::new(col as i64, row as i64)
    }

    /// Project a whole dataset, preserving order.
    pub fn project_all(&self, data: &[Sample], width: usize, height: usize) -> Vec<GridPoint> {
        data.iter().map(|&s| self.project(s, width, height)).collect()
    }

    /// Axis value shown on plot row `row` (0 = top) for a vertical scale of `height` rows.
    pub fn y_at_row(&self, row: usize, height: usize) -> f64 {
        let span = height.saturating_sub(1).max(1) as f64;
        self.max_y * (height as f64 - 1.0 - row as f64) / span
    }

    /// Axis value shown at plot column `col` for a drawing `width` columns wide.
    pub fn x_at_col(&self, col: usize, width: usize) -> f64 {
        let span = width.saturating_sub(1).max(1) as f64;
        self.max_x * col as f64 / span
    }
}

/// Scale `data` into grid coordinates using its own maxima, with `max_y`
/// limited to `y_cap` (pass `f64::INFINITY` for no cap).
pub fn scale(data: &[Sample], width: usize, height: usize, y_cap: f64) -> Vec<GridPoint> {
    Extent::of(data).capped(y_cap).project_all(data, width, height)
}
