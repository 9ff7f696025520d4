// File: crates/asciichart-core/src/axis.rs
// Summary: Axis labels, per-mode column layout and axis painting.

use crate::grid::{tick_columns, Cell, Grid};
use crate::scale::Extent;
use crate::text::format_label;
use crate::theme::Theme;
use crate::types::{Gutters, LABEL_WIDTH};

/// Number of x-axis tick intervals.
const X_TICK_PARTS: usize = 5;

/// A vertical axis, identified by the caption shown in the legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn default_left() -> Self {
        Self::new("Value")
    }

    pub fn default_right() -> Self {
        Self::new("Other")
    }
}

/// Column positions for one render, built once per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisLayout {
    /// Drawing area size.
    pub width: usize,
    pub height: usize,
    pub gutters: Gutters,
    /// Column of the left border glyph.
    pub left_border: usize,
    /// Column of the right border glyph (dual scale only).
    pub right_border: Option<usize>,
}

impl AxisLayout {
    pub fn single(width: usize, height: usize) -> Self {
        Self { width, height, gutters: Gutters::single(), left_border: LABEL_WIDTH, right_border: None }
    }

    pub fn dual(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            gutters: Gutters::dual(),
            left_border: LABEL_WIDTH,
            right_border: Some(width + LABEL_WIDTH + 1),
        }
    }

    /// Total grid columns: drawing width plus gutters.
    pub fn total_width(&self) -> usize {
        self.width + self.gutters.hsum()
    }

    /// Total grid rows: plot rows, the axis rule and the x-label row.
    pub fn total_rows(&self) -> usize {
        self.height + 2
    }

    /// Row of the horizontal axis rule.
    pub fn rule_row(&self) -> usize {
        self.height
    }

    /// Grid column of drawing column `col`.
    pub fn grid_col(&self, col: i64) -> i64 {
        col.saturating_add(self.left_border as i64 + 1)
    }

    /// Grid row of drawing row `row` (rows grow upward in data space).
    pub fn grid_row(&self, row: i64) -> i64 {
        (self.height as i64 - 1).saturating_sub(row)
    }

    /// Whether a grid cell lies in the plot area and left of any right border.
    pub fn in_plot(&self, row: i64, col: i64) -> bool {
        if let Some(rb) = self.right_border {
            if col > rb as i64 {
                return false;
            }
        }
        (0..self.height as i64).contains(&row) && (0..self.total_width() as i64).contains(&col)
    }

    /// Paint a column of y labels for `extent` starting at grid column `col`.
    fn paint_y_labels(&self, grid: &mut Grid, extent: &Extent, col: usize) {
        for row in 0..self.height {
            let label = format_label(extent.y_at_row(row, self.height), LABEL_WIDTH);
            grid.put_str(row, col, &format!("{label:<width$}", width = LABEL_WIDTH));
        }
    }

    fn paint_border(&self, grid: &mut Grid, col: usize, glyph: char) {
        for row in 0..self.height {
            grid.set(row as i64, col as i64, Cell::Text(glyph));
        }
    }

    /// Shared scale: left labels, left border, rule with a bottom tee and x tick labels.
    pub fn paint_single(&self, grid: &mut Grid, theme: &Theme, extent: &Extent) {
        self.paint_y_labels(grid, extent, 0);
        self.paint_border(grid, self.left_border, theme.border);
        grid.fill_row(self.rule_row(), theme.rule);
        grid.set(self.rule_row() as i64, self.left_border as i64, Cell::Text(theme.corner_single));

        for (i, col) in tick_columns(self.width, X_TICK_PARTS).into_iter().enumerate() {
            let label = format_label(extent.x_at_col(col, self.width), LABEL_WIDTH);
            let pos = self.left_border + i * (self.width / X_TICK_PARTS);
            grid.put_str(self.rule_row() + 1, pos, &label);
        }
    }

    /// Independent scales: labels and borders on both sides, inward tees on the rule.
    pub fn paint_dual(&self, grid: &mut Grid, theme: &Theme, left: &Extent, right: &Extent) {
        let rb = self.right_border.unwrap_or(self.total_width());
        self.paint_y_labels(grid, left, 0);
        self.paint_y_labels(grid, right, rb + 1);
        self.paint_border(grid, self.left_border, theme.border);
        self.paint_border(grid, rb, theme.border);
        grid.fill_row(self.rule_row(), theme.rule);
        grid.set(self.rule_row() as i64, self.left_border as i64, Cell::Text(theme.corner_left));
        grid.set(self.rule_row() as i64, rb as i64, Cell::Text(theme.corner_right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts() {
        let s = AxisLayout::single(58, 15);
        assert_eq!(s.total_width(), 70);
        assert_eq!(s.total_rows(), 17);
        assert_eq!(s.right_border, None);
        let d = AxisLayout::dual(58, 15);
        assert_eq!(d.total_width(), 78);
        assert_eq!(d.right_border, Some(67));
    }

    #[test]
    fn data_rows_grow_upward() {
        let s = AxisLayout::single(10, 5);
        assert_eq!(s.grid_row(0), 4);
        assert_eq!(s.grid_row(4), 0);
        assert_eq!(s.grid_col(0), 9);
    }

    #[test]
    fn plot_bounds() {
        let d = AxisLayout::dual(10, 5);
        assert!(d.in_plot(0, 19));
        assert!(!d.in_plot(0, 20));
        assert!(!d.in_plot(5, 10));
        assert!(!d.in_plot(-1, 10));
    }

    #[test]
    fn single_axis_chrome() {
        let layout = AxisLayout::single(10, 3);
        let mut grid = Grid::new(layout.total_rows(), layout.total_width());
        layout.paint_single(&mut grid, &Theme::PLAIN, &Extent::new(9.0, 4.0));
        let lines = grid.to_lines(&Theme::PLAIN, 80);
        assert_eq!(lines[0], "     4.0│             ");
        assert_eq!(lines[2], "     0.0│             ");
        assert_eq!(lines[3], "────────┴─────────────");
        // ticks every two columns; later labels overwrite earlier ones
        assert_eq!(lines[4].chars().count(), 22);
        assert!(lines[4].starts_with("             "));
        assert!(lines[4].ends_with("     8"));
    }
}
