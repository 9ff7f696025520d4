// File: crates/asciichart-core/src/chart.rs
// Summary: Chart struct and the text rendering pipeline (validation, scaling, compositing, legend).

use std::fmt;

use crate::axis::{Axis, AxisLayout};
use crate::error::ChartError;
use crate::geometry::{classify, interpolate_rows, GridPoint, Slope};
use crate::grid::Grid;
use crate::scale::Extent;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{
    Sample, HEIGHT, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH, TERMINAL_COLUMNS, WIDTH,
};

/// How series share vertical scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// Every series on one left scale.
    #[default]
    Single,
    /// Exactly two series, each with its own scale (left and right).
    Dual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drawing columns, label gutters excluded.
    pub width: usize,
    /// Drawing rows, axis rule and x-label row excluded.
    pub height: usize,
    /// Emit ANSI color escapes around markers and connectives.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, color: true }
    }
}

/// A rendered chart: grid rows top to bottom, then legend entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub legend: Vec<String>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "Legend:")?;
        for entry in &self.legend {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub mode: ScaleMode,
    pub left_axis: Axis,
    /// Only shown in `ScaleMode::Dual`.
    pub right_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            mode: ScaleMode::Single,
            left_axis: Axis::default_left(),
            right_axis: Axis::default_right(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render the chart into a text frame.
    ///
    /// Fails without drawing anything when dual mode is asked for with a
    /// series count other than two, or when the plot area is too small to scale
    /// or larger than `MAX_WIDTH` x `MAX_HEIGHT`.
    pub fn render(&self, opts: &RenderOptions) -> Result<Frame, ChartError> {
        let plan = Plan::build(self.mode, &self.series)?;
        if opts.width < MIN_WIDTH || opts.height < MIN_HEIGHT {
            return Err(ChartError::PlotTooSmall {
                width: opts.width,
                height: opts.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        if opts.width > MAX_WIDTH || opts.height > MAX_HEIGHT {
            return Err(ChartError::PlotTooLarge {
                width: opts.width,
                height: opts.height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }

        let theme = Theme::for_color(opts.color);
        let layout = plan.layout(opts.width, opts.height);
        let mut grid = Grid::new(layout.total_rows(), layout.total_width());
        tracing::debug!(
            mode = ?self.mode,
            series = self.series.len(),
            columns = layout.total_width(),
            rows = layout.total_rows(),
            "rendering frame"
        );

        match plan {
            Plan::Shared(extent) => layout.paint_single(&mut grid, theme, &extent),
            Plan::Split { left, right } => layout.paint_dual(&mut grid, theme, &left, &right),
        }

        for (idx, series) in self.series.iter().enumerate() {
            let extent = plan.extent_for(idx);
            tracing::debug!(series = idx, max_x = extent.max_x, max_y = extent.max_y, "plotting");
            let points = extent.project_all(&series.data, layout.width, layout.height);
            draw_series(&mut grid, &layout, &points, idx);
        }

        Ok(Frame {
            lines: grid.to_lines(theme, TERMINAL_COLUMNS),
            legend: self.legend(theme),
        })
    }

    fn legend(&self, theme: &Theme) -> Vec<String> {
        match self.mode {
            ScaleMode::Single => (0..self.series.len())
                .map(|i| format!("{} -> Dataset {} ({})", theme.paint_marker(i), i + 1, self.left_axis.label))
                .collect(),
            ScaleMode::Dual => vec![
                format!("{} -> {}", theme.paint_marker(0), self.left_axis.label),
                format!("{} -> {}", theme.paint_marker(1), self.right_axis.label),
                format!("{} -> Overlap", theme.paint_overlap()),
            ],
        }
    }
}

/// Render `datasets` with the given mode and axis captions.
pub fn render(
    datasets: &[Vec<Sample>],
    mode: ScaleMode,
    left_label: &str,
    right_label: &str,
    opts: &RenderOptions,
) -> Result<Frame, ChartError> {
    let chart = Chart {
        series: datasets.iter().cloned().map(Series::with_data).collect(),
        mode,
        left_axis: Axis::new(left_label),
        right_axis: Axis::new(right_label),
    };
    chart.render(opts)
}

/// Scale extents for one render, per mode.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Plan {
    Shared(Extent),
    Split { left: Extent, right: Extent },
}

impl Plan {
    fn build(mode: ScaleMode, series: &[Series]) -> Result<Self, ChartError> {
        let shared = Extent::of_all(series.iter().map(|s| s.data.as_slice()));
        match mode {
            ScaleMode::Single => Ok(Plan::Shared(shared)),
            ScaleMode::Dual => match series {
                [l, r] => Ok(Plan::Split {
                    left: Extent::new(shared.max_x, l.extent().max_y),
                    right: Extent::new(shared.max_x, r.extent().max_y),
                }),
                _ => Err(ChartError::DualSeriesCount { found: series.len() }),
            },
        }
    }

    fn layout(&self, width: usize, height: usize) -> AxisLayout {
        match self {
            Plan::Shared(_) => AxisLayout::single(width, height),
            Plan::Split { .. } => AxisLayout::dual(width, height),
        }
    }

    fn extent_for(&self, idx: usize) -> Extent {
        match *self {
            Plan::Shared(e) => e,
            Plan::Split { left, right } => if idx == 0 { left } else { right },
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Markers at every sample and connectives between neighbours; a lone sample still gets its marker.
fn draw_series(grid: &mut Grid, layout: &AxisLayout, points: &[GridPoint], series: usize) {
    let last_col = layout.width as i64 - 1;
    let clamp = |p: GridPoint| GridPoint::new(p.col.clamp(0, last_col), p.row);
    let plot_rows = 0..layout.height as i64;

    if let [only] = points {
        plot_point(grid, layout, clamp(*only), series);
        return;
    }

    for pair in points.windows(2) {
        let a = clamp(pair[0]);
        let b = clamp(pair[1]);
        let stroke = classify(Slope::between(a, b));

        plot_point(grid, layout, a, series);
        plot_point(grid, layout, b, series);

        for p in interpolate_rows(a, b, plot_rows.clone()) {
            let (row, col) = (layout.grid_row(p.row), layout.grid_col(p.col));
            if layout.in_plot(row, col) {
                grid.plot_connective(row, col, stroke, series);
            }
        }
    }
}

fn plot_point(grid: &mut Grid, layout: &AxisLayout, p: GridPoint, series: usize) {
    let (row, col) = (layout.grid_row(p.row), layout.grid_col(p.col));
    if layout.in_plot(row, col) {
        grid.plot_marker(row, col, series);
    }
}
