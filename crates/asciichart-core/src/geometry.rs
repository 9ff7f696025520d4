// File: crates/asciichart-core/src/geometry.rs
// Summary: Integer grid points, slope classification and the line sweep between markers.

use std::ops::Range;

/// A scaled data point: `col` grows rightward, `row` grows upward from the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub col: i64,
    pub row: i64,
}

impl GridPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

/// Slope of a segment in grid units. `Vertical` when both ends share a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    /// Slope from `a` to `b`.
    pub fn between(a: GridPoint, b: GridPoint) -> Self {
        let dx = b.col.saturating_sub(a.col);
        if dx == 0 {
            Slope::Vertical
        } else {
            Slope::Finite(b.row.saturating_sub(a.row) as f64 / dx as f64)
        }
    }
}

/// Connective glyph kinds, mirrored for rising and falling segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stroke {
    Flat,
    Shallow,
    GentleUp,
    GentleDown,
    DiagonalUp,
    DiagonalDown,
    SteepUp,
    SteepDown,
    Vertical,
}

impl Stroke {
    pub const fn glyph(self) -> char {
        match self {
            Stroke::Flat => '─',
            Stroke::Shallow => '╌',
            Stroke::GentleUp => '╴',
            Stroke::GentleDown => '╶',
            Stroke::DiagonalUp => '╱',
            Stroke::DiagonalDown => '╲',
            Stroke::SteepUp => '▲',
            Stroke::SteepDown => '▼',
            Stroke::Vertical => '│',
        }
    }
}

/// Pick the connective glyph for a segment slope.
///
/// | magnitude   | rising       | falling      |
/// |-------------|--------------|--------------|
/// | 0           | `Flat`       | `Flat`       |
/// | (0, 0.1)    | `Shallow`    | `Shallow`    |
/// | [0.1, 0.5)  | `GentleUp`   | `GentleDown` |
/// | [0.5, 1)    | `DiagonalUp` | `DiagonalDown` |
/// | [1, 2)      | `SteepUp`    | `SteepDown`  |
/// | >= 2, vertical | `Vertical` | `Vertical`  |
///
/// NaN matches no bucket and falls back to `DiagonalUp`.
pub fn classify(slope: Slope) -> Stroke {
    let m = match slope {
        Slope::Vertical => return Stroke::Vertical,
        Slope::Finite(m) => m,
    };
    let rising = m > 0.0;
    let a = m.abs();
    if a == 0.0 {
        Stroke::Flat
    } else if a < 0.1 {
        Stroke::Shallow
    } else if a < 0.5 {
        if rising { Stroke::GentleUp } else { Stroke::GentleDown }
    } else if a < 1.0 {
        if rising { Stroke::DiagonalUp } else { Stroke::DiagonalDown }
    } else if a < 2.0 {
        if rising { Stroke::SteepUp } else { Stroke::SteepDown }
    } else if a >= 2.0 {
        Stroke::Vertical
    } else {
        Stroke::DiagonalUp
    }
}

/// Equal-step walk from one grid point to another.
#[derive(Clone, Copy, Debug)]
struct Sweep {
    from: GridPoint,
    dx: f64,
    dy: f64,
    steps: i64,
}

impl Sweep {
    fn new(a: GridPoint, b: GridPoint) -> Self {
        let dx = b.col.saturating_sub(a.col);
        let dy = b.row.saturating_sub(a.row);
        let steps = dx.saturating_abs().max(dy.saturating_abs());
        Self { from: a, dx: dx as f64, dy: dy as f64, steps }
    }

    #[inline]
    fn at(&self, step: i64) -> GridPoint {
        let n = self.steps as f64;
        let x = self.from.col as f64 + self.dx * step as f64 / n;
        let y = self.from.row as f64 + self.dy * step as f64 / n;
        GridPoint::new(x.round() as i64, y.round() as i64)
    }
}

/// Interior cells of the sweep from `a` to `b`, excluding both ends.
///
/// The sweep takes `max(|dcol|, |drow|)` equal steps and rounds each
/// intermediate position half away from zero, the same rounding the scaler uses.
pub fn interpolate(a: GridPoint, b: GridPoint) -> impl Iterator<Item = GridPoint> {
    let sweep = Sweep::new(a, b);
    (1..sweep.steps).map(move |s| sweep.at(s))
}

/// The cells of [`interpolate`] whose row lies in `rows`.
///
/// Only the steps that can land inside `rows` are visited, so a segment
/// running far off the plot costs no more than one crossing it.
pub fn interpolate_rows(
    a: GridPoint,
    b: GridPoint,
    rows: Range<i64>,
) -> impl Iterator<Item = GridPoint> {
    let sweep = Sweep::new(a, b);
    let last = sweep.steps - 1;
    let (lo, hi) = if sweep.dy == 0.0 {
        if rows.contains(&a.row) { (1, last) } else { (1, 0) }
    } else {
        let to_step = |r: i64| (r as f64 - a.row as f64) * sweep.steps as f64 / sweep.dy;
        let (s1, s2) = (to_step(rows.start.saturating_sub(1)), to_step(rows.end));
        let lo = (s1.min(s2).floor() as i64).saturating_sub(1).max(1);
        let hi = (s1.max(s2).ceil() as i64).saturating_add(1).min(last);
        (lo, hi)
    };
    (lo..=hi).map(move |s| sweep.at(s)).filter(move |p| rows.contains(&p.row))
}
