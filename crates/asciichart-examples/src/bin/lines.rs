// File: crates/asciichart-examples/src/bin/lines.rs
// Summary: Three USD price series sharing one vertical scale.

use anyhow::Result;
use asciichart_core::{Axis, Chart, RenderOptions, Series};

fn main() -> Result<()> {
    let mut chart = Chart::new();
    chart.left_axis = Axis::new("USD");
    chart.add_series(Series::with_data(vec![
        (1.0, 1.0), (4.0, 5000.0), (7.0, 8000.0), (10.0, 10000.0), (15.0, 12000.0),
    ]));
    chart.add_series(Series::with_data(vec![
        (1.0, 3000.0), (3.0, 4000.0), (5.0, 7000.0), (7.0, 6000.0), (10.0, 5000.0),
    ]));
    chart.add_series(Series::with_data(vec![
        (1.0, 10000.0), (3.0, 8000.0), (5.0, 6000.0), (7.0, 4000.0), (10.0, 2000.0),
    ]));

    println!("Single-Scale Mode:");
    print!("{}", chart.render(&RenderOptions::default())?);
    Ok(())
}
