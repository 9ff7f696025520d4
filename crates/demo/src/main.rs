// File: crates/demo/src/main.rs
// Summary: Demo loads price history (JSON) or XY series (CSV) and prints them as a text chart.

mod cli;
mod load;

use std::path::Path;

use anyhow::{Context, Result};
use asciichart_core::{Axis, Chart, RenderOptions, ScaleMode, Series};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::load::{fit_dimensions, load_price_history, load_xy_csv};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (mut chart, (width, height)) = match cli.inputs.as_slice() {
        [one] if is_json(one) => price_history_chart(one)?,
        paths => csv_chart(paths)?,
    };

    if let Some(mode) = cli.mode {
        chart.mode = mode.into();
    }
    if let Some(label) = cli.left_label {
        chart.left_axis = Axis::new(label);
    }
    if let Some(label) = cli.right_label {
        chart.right_axis = Axis::new(label);
    }
    let opts = RenderOptions {
        width: cli.width.unwrap_or(width),
        height: cli.height.unwrap_or(height),
        color: !cli.no_color,
    };

    let title = match chart.mode {
        ScaleMode::Single => "Single-Scale Mode",
        ScaleMode::Dual => "Dual-Scale Mode",
    };
    let frame = chart.render(&opts).context("rendering chart")?;
    println!("{title}: {} vs {}", chart.left_axis.label, chart.right_axis.label);
    println!("Width: {}, Height: {}", opts.width, opts.height);
    print!("{frame}");
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// USD vs satoshi prices on independent scales, sized from the stored chart.
fn price_history_chart(path: &Path) -> Result<(Chart, (usize, usize))> {
    let history = load_price_history(path)?;
    if history.usd.is_empty() || history.satoshi.is_empty() {
        anyhow::bail!("no samples loaded from {}", path.display());
    }
    tracing::info!(
        samples = history.usd.len(),
        size_width = history.size_width,
        size_height = history.size_height,
        space_diff = history.space_diff,
        "loaded price history"
    );

    let mut chart = Chart::new();
    chart.mode = ScaleMode::Dual;
    chart.left_axis = Axis::new("USD");
    chart.right_axis = Axis::new("Satoshis");
    chart.add_series(Series::with_data(history.usd));
    chart.add_series(Series::with_data(history.satoshi));
    Ok((chart, fit_dimensions(history.size_width, history.size_height)))
}

/// One series per CSV file on a shared scale.
fn csv_chart(paths: &[impl AsRef<Path>]) -> Result<(Chart, (usize, usize))> {
    let mut chart = Chart::new();
    for path in paths {
        let path = path.as_ref();
        let data = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        if data.is_empty() {
            anyhow::bail!("no samples loaded from {}", path.display());
        }
        tracing::info!(samples = data.len(), path = %path.display(), "loaded series");
        chart.add_series(Series::with_data(data));
    }
    let defaults = RenderOptions::default();
    Ok((chart, (defaults.width, defaults.height)))
}
