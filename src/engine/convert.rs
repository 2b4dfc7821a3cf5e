//! Numeric conversion and fixed-point rendering.

/// Render `value` with exactly `precision` decimal places, rounding
/// half-away-from-zero on the last kept digit.
///
/// The value is scaled to an integer before rounding so the string is built
/// from a single rounding step; formatting an already-rounded float would
/// round a second time.
pub(crate) fn format_fixed(value: f64, precision: u8) -> String {
    let factor = 10f64.powi(i32::from(precision));
    let scaled = (value * factor).round() as i64;

    if precision == 0 {
        return scaled.to_string();
    }

    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    let pow = 10u64.pow(u32::from(precision));
    format!("{sign}{}.{:0width$}", magnitude / pow, magnitude % pow, width = precision as usize)
}
