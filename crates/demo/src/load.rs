// File: crates/demo/src/load.rs
// Summary: Loaders turning price-history JSON and XY CSV files into chart samples.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use asciichart_core::Sample;
use serde::Deserialize;

/// Stored prices run from 0 (highest) to this value (lowest).
const INDEX_SCALE: f64 = 300.0;

/// Drawable span of the stored chart, in its own units (50..650 x 50..350).
const STORED_SPAN_X: f64 = 600.0;
const STORED_SPAN_Y: f64 = 300.0;

const WIDTH_RANGE: (usize, usize) = (20, 58);
const HEIGHT_RANGE: (usize, usize) = (10, 15);

#[derive(Debug, Deserialize)]
struct RawPriceHistory {
    #[serde(rename = "X1Array")]
    times: Vec<f64>,
    #[serde(rename = "Y1Array")]
    usd: Vec<f64>,
    #[serde(rename = "Y1ArraySatoshi")]
    satoshi: Vec<f64>,
    #[serde(rename = "MaxPrice", default)]
    max_usd: Option<f64>,
    #[serde(rename = "MaxPriceSatoshi", default)]
    max_satoshi: Option<f64>,
    #[serde(rename = "SizeWidth", default = "default_width")]
    size_width: f64,
    #[serde(rename = "SizeHeight", default = "default_height")]
    size_height: f64,
    #[serde(rename = "SpaceDiff", default = "default_space_diff")]
    space_diff: f64,
}

fn default_width() -> f64 { 700.0 }
fn default_height() -> f64 { 400.0 }
fn default_space_diff() -> f64 { 50.0 }

/// USD and satoshi price series sharing one time axis, plus the stored chart size.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PriceHistory {
    pub(crate) usd: Vec<Sample>,
    pub(crate) satoshi: Vec<Sample>,
    pub(crate) size_width: f64,
    pub(crate) size_height: f64,
    pub(crate) space_diff: f64,
}

/// Convert a stored index value back to a price.
fn denormalize(v: f64, max: Option<f64>) -> f64 {
    match max {
        Some(max) => (INDEX_SCALE - v) / INDEX_SCALE * max,
        None => INDEX_SCALE - v,
    }
}

fn pair(times: &[f64], values: &[f64], max: Option<f64>) -> Vec<Sample> {
    times.iter().zip(values).map(|(&t, &v)| (t, denormalize(v, max))).collect()
}

/// Load a price-history JSON file.
pub(crate) fn load_price_history(path: &Path) -> Result<PriceHistory> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let raw: RawPriceHistory = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing price history {}", path.display()))?;
    Ok(PriceHistory {
        usd: pair(&raw.times, &raw.usd, raw.max_usd),
        satoshi: pair(&raw.times, &raw.satoshi, raw.max_satoshi),
        size_width: raw.size_width,
        size_height: raw.size_height,
        space_diff: raw.space_diff,
    })
}

/// Map a stored chart size onto a drawing size the text renderer supports.
pub(crate) fn fit_dimensions(width: f64, height: f64) -> (usize, usize) {
    (
        fit(width, STORED_SPAN_X, WIDTH_RANGE),
        fit(height, STORED_SPAN_Y, HEIGHT_RANGE),
    )
}

fn fit(size: f64, span: f64, (lo, hi): (usize, usize)) -> usize {
    if size <= 0.0 || !size.is_finite() {
        return hi;
    }
    let scaled = (size * (span / size)).trunc();
    (scaled as usize).clamp(lo, hi)
}

/// Load one XY series from CSV. Columns are matched by header name and fall
/// back to the first two; rows that do not parse are skipped.
pub(crate) fn load_xy_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, path = %path.display(), "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "date"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "price", "close"]).unwrap_or(1);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let x = rec.get(i_x).and_then(parse_time_to_f64);
        let y = rec.get(i_y).and_then(|s| s.trim().parse::<f64>().ok());
        match (x, y) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, path = %path.display(), "skipped unparseable rows");
    }
    Ok(out)
}

/// Numeric x value; epoch milliseconds are reduced to seconds.
fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        }
        return Some(n as f64);
    }
    s.parse::<f64>().ok()
}
