// File: crates/asciichart-examples/src/bin/dual.rs
// Summary: USD vs EUR prices on independent left/right scales.

use anyhow::Result;
use asciichart_core::{render, RenderOptions, ScaleMode};

fn main() -> Result<()> {
    let usd = vec![(1.0, 100.0), (4.0, 150.0), (7.0, 200.0), (10.0, 180.0), (15.0, 220.0)];
    let eur = vec![(1.0, 10000.0), (3.0, 8000.0), (5.0, 6000.0), (7.0, 4000.0), (10.0, 2000.0)];

    println!("Dual-Scale Mode:");
    let frame = render(&[usd, eur], ScaleMode::Dual, "USD", "EUR", &RenderOptions::default())?;
    print!("{frame}");
    Ok(())
}
