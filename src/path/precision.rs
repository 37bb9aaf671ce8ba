use crate::path::scan::NumberScanner;

/// Round to `places` decimals, ties toward positive infinity. Never returns `-0.0`.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale + 0.5).floor() / scale;
    rounded + 0.0
}

/// Fixed-point rendering with exactly `places` decimals, rounded half-up.
pub fn format_fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_half_up(value, places))
}

/// Shortest rendering of a coordinate at the given precision.
///
/// Precision 0 yields an integer. Otherwise the value is rounded to `precision`
/// decimals and trailing zeros are dropped (`20.10` becomes `20.1`, `3.00` becomes `3`).
pub fn format_coordinate(value: f64, precision: u32) -> String {
    if precision == 0 {
        return format!("{}", round_half_up(value, 0));
    }
    let fixed = format_fixed(value, precision);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round every numeric token of a path string. Everything else is copied verbatim.
pub fn optimize_precision(path: &str, precision: u32) -> String {
    let mut out = String::with_capacity(path.len());
    let mut last = 0usize;
    for range in NumberScanner::new(path) {
        out.push_str(&path[last..range.start]);
        let token = &path[range.clone()];
        match token.parse::<f64>() {
            Ok(v) => out.push_str(&format_coordinate(v, precision)),
            Err(_) => out.push_str(token),
        }
        last = range.end;
    }
    out.push_str(&path[last..]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/precision.rs"]
mod tests;
