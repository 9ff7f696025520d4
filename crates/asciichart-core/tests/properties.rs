// File: crates/asciichart-core/tests/properties.rs
// Purpose: Property checks for labels, scaling, slope glyphs and the line sweep.

use asciichart_core::{
    classify, format_label, interpolate, interpolate_rows, render, scale, Cell, Grid, GridPoint, RenderOptions,
    ScaleMode, Slope, Stroke,
};
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..1e6, -1e6f64..1e6)
}

proptest! {
    #[test]
    fn label_never_exceeds_max_len(v in proptest::num::f64::ANY, max_len in 0usize..12) {
        prop_assert!(format_label(v, max_len).chars().count() <= max_len);
    }

    #[test]
    fn zero_max_x_collapses(ys in proptest::collection::vec(-1e3f64..1e3, 0..20)) {
        let data: Vec<_> = ys.iter().map(|&y| (0.0, y)).collect();
        let pts = scale(&data, 58, 15, f64::INFINITY);
        prop_assert_eq!(pts.len(), data.len());
        prop_assert!(pts.iter().all(|p| *p == GridPoint::ORIGIN));
    }

    #[test]
    fn zero_max_y_collapses(xs in proptest::collection::vec(0.0f64..1e3, 1..20)) {
        let data: Vec<_> = xs.iter().map(|&x| (x, 0.0)).collect();
        prop_assert!(scale(&data, 58, 15, f64::INFINITY).iter().all(|p| *p == GridPoint::ORIGIN));
    }

    #[test]
    fn mirrored_slopes_differ_outside_shallow(m in 0.1f64..2.0) {
        prop_assert_ne!(classify(Slope::Finite(m)), classify(Slope::Finite(-m)));
    }

    #[test]
    fn shallow_slopes_coincide(m in 1e-9f64..0.1) {
        prop_assert_eq!(classify(Slope::Finite(m)), Stroke::Shallow);
        prop_assert_eq!(classify(Slope::Finite(-m)), Stroke::Shallow);
    }

    #[test]
    fn sweep_attempts_steps_minus_one(
        a in (-50i64..50, -50i64..50),
        b in (-50i64..50, -50i64..50),
    ) {
        let (a, b) = (GridPoint::new(a.0, a.1), GridPoint::new(b.0, b.1));
        let steps = (b.col - a.col).abs().max((b.row - a.row).abs());
        prop_assert_eq!(interpolate(a, b).count() as i64, (steps - 1).max(0));
    }

    #[test]
    fn windowed_sweep_agrees_with_full_sweep(
        a in (0i64..60, -200i64..200),
        b in (0i64..60, -200i64..200),
        height in 2i64..30,
    ) {
        let (a, b) = (GridPoint::new(a.0, a.1), GridPoint::new(b.0, b.1));
        let full: Vec<_> = interpolate(a, b).filter(|p| (0..height).contains(&p.row)).collect();
        let windowed: Vec<_> = interpolate_rows(a, b, 0..height).collect();
        prop_assert_eq!(full, windowed);
    }

    #[test]
    fn connectives_never_replace_markers(cells in proptest::collection::vec((0i64..8, 0i64..8), 1..30)) {
        let mut grid = Grid::new(8, 8);
        for &(r, c) in &cells {
            grid.plot_marker(r, c, 0);
        }
        for r in 0..8 {
            for c in 0..8 {
                grid.plot_connective(r, c, Stroke::Flat, 1);
            }
        }
        for &(r, c) in &cells {
            prop_assert_eq!(grid.get(r, c), Some(Cell::Marker(0)));
        }
    }

    #[test]
    fn frame_shape_is_fixed(
        data in proptest::collection::vec(sample(), 0..40),
        width in 5usize..90,
        height in 2usize..30,
    ) {
        let opts = RenderOptions { width, height, color: false };
        let frame = render(&[data], ScaleMode::Single, "V", "", &opts).unwrap();
        prop_assert_eq!(frame.lines.len(), height + 2);
        prop_assert!(frame.lines.iter().all(|l| l.chars().count() == (width + 12).min(80)));
    }

    #[test]
    fn dual_needs_exactly_two(n in 0usize..6) {
        prop_assume!(n != 2);
        let datasets = vec![vec![(1.0, 1.0)]; n];
        prop_assert!(render(&datasets, ScaleMode::Dual, "L", "R", &RenderOptions::default()).is_err());
    }
}
