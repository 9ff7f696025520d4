// File: crates/asciichart-core/src/grid.rs
// Summary: Character grid with typed cells; serialized to text only at the end of a render.

use crate::geometry::Stroke;
use crate::theme::Theme;

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Blank,
    /// Axis chrome: labels, borders, rule.
    Text(char),
    /// Data point of the series at this index.
    Marker(usize),
    /// Slope glyph between two markers of a series.
    Connective { stroke: Stroke, series: usize },
    /// Points of two different series landed here.
    Overlap,
}

/// Row-major cell buffer, `rows` x `cols`, filled with `Cell::Blank`.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Cell::Blank; rows * cols] }
    }

    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        (r < self.rows && c < self.cols).then_some(r * self.cols + c)
    }

    /// Cell at (`row`, `col`); `None` outside the grid.
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Out-of-range writes are ignored.
    pub fn set(&mut self, row: i64, col: i64, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` left to right from (`row`, `col`), dropping what falls off the grid.
    pub fn put_str(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(row as i64, (col + i) as i64, Cell::Text(ch));
        }
    }

    /// Fill a whole row with one glyph.
    pub fn fill_row(&mut self, row: usize, glyph: char) {
        for col in 0..self.cols {
            self.set(row as i64, col as i64, Cell::Text(glyph));
        }
    }

    /// Place a data point of `series`.
    ///
    /// Blank and connective cells take the marker. A cell holding another
    /// series' marker becomes an overlap; a cell already holding this series'
    /// marker is left as is.
    pub fn plot_marker(&mut self, row: i64, col: i64, series: usize) {
        let next = match self.get(row, col) {
            None => return,
            Some(Cell::Blank | Cell::Connective { .. }) => Cell::Marker(series),
            Some(Cell::Marker(s)) if s == series => return,
            Some(_) => Cell::Overlap,
        };
        self.set(row, col, next);
    }

    /// Place a connective glyph if the cell is still blank.
    /// Returns whether the cell was written.
    pub fn plot_connective(&mut self, row: i64, col: i64, stroke: Stroke, series: usize) -> bool {
        if self.get(row, col) == Some(Cell::Blank) {
            self.set(row, col, Cell::Connective { stroke, series });
            true
        } else {
            false
        }
    }

    /// Render each row's first `max_cols` cells as text.
    pub fn to_lines(&self, theme: &Theme, max_cols: usize) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().take(max_cols).map(|c| render_cell(*c, theme)).collect())
            .collect()
    }
}

fn render_cell(cell: Cell, theme: &Theme) -> String {
    match cell {
        Cell::Blank => " ".to_string(),
        Cell::Text(ch) => ch.to_string(),
        Cell::Marker(s) => theme.paint_marker(s),
        Cell::Connective { stroke, series } => theme.paint(theme.color(series), stroke.glyph()),
        Cell::Overlap => theme.paint_overlap(),
    }
}

/// Evenly spaced tick columns in `0..width`, every `width / parts` columns.
pub fn tick_columns(width: usize, parts: usize) -> Vec<usize> {
    let step = (width / parts.max(1)).max(1);
    (0..width).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_rules() {
        let mut g = Grid::new(2, 2);
        g.plot_connective(0, 0, Stroke::Flat, 0);
        g.plot_marker(0, 0, 1);
        assert_eq!(g.get(0, 0), Some(Cell::Marker(1)));
        g.plot_marker(0, 0, 1);
        assert_eq!(g.get(0, 0), Some(Cell::Marker(1)));
        g.plot_marker(0, 0, 0);
        assert_eq!(g.get(0, 0), Some(Cell::Overlap));
        g.plot_marker(0, 0, 2);
        assert_eq!(g.get(0, 0), Some(Cell::Overlap));
    }

    #[test]
    fn connective_never_overwrites() {
        let mut g = Grid::new(1, 2);
        g.plot_marker(0, 0, 0);
        assert!(!g.plot_connective(0, 0, Stroke::Vertical, 0));
        assert!(g.plot_connective(0, 1, Stroke::Flat, 0));
        assert!(!g.plot_connective(0, 1, Stroke::Vertical, 1));
        assert_eq!(g.get(0, 1), Some(Cell::Connective { stroke: Stroke::Flat, series: 0 }));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut g = Grid::new(1, 1);
        g.plot_marker(-1, 0, 0);
        g.plot_marker(0, 5, 0);
        g.put_str(0, 0, "abc");
        assert_eq!(g.to_lines(&Theme::PLAIN, 80), vec!["a".to_string()]);
    }

    #[test]
    fn lines_are_clipped() {
        let mut g = Grid::new(1, 5);
        g.put_str(0, 0, "hello");
        assert_eq!(g.to_lines(&Theme::PLAIN, 3), vec!["hel".to_string()]);
    }

    #[test]
    fn ticks_every_fifth() {
        assert_eq!(tick_columns(58, 5), vec![0, 11, 22, 33, 44, 55]);
        assert_eq!(tick_columns(5, 5), vec![0, 1, 2, 3, 4]);
    }
}
