// File: crates/asciichart-core/src/text.rs
// Summary: Fixed-width numeric labels for axis ticks.

/// Magnitude above which labels switch to exponential notation.
const LARGE: f64 = 99_999.0;
/// Non-zero magnitude below which labels switch to exponential notation.
const SMALL: f64 = 0.01;

/// Render `value` as an axis label of at most `max_len` characters.
///
/// Ordinary magnitudes are fixed-point with one decimal, right-aligned in an
/// eight-character field. Very large or very small non-zero values use
/// exponential notation (`1.2e+05`). Either form is then clipped to `max_len`.
pub fn format_label(value: f64, max_len: usize) -> String {
    let abs = value.abs();
    let raw = if abs > LARGE || (value != 0.0 && abs < SMALL) {
        exponential(value)
    } else {
        format!("{value:>8.1}")
    };
    raw.chars().take(max_len).collect()
}

/// One-decimal exponential form with a signed, two-digit exponent.
fn exponential(value: f64) -> String {
    let s = format!("{value:.1e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.unsigned_abs())
            }
            Err(_) => s,
        },
        // inf / NaN have no exponent part
        None => s,
    }
}
