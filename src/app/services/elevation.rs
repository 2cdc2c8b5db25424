//! Elevation normalization for heterogeneous source representations
//!
//! ISD reports elevations as signed strings, sometimes with a unit suffix
//! (`"+0132.0"`, `"15 m"`); GHCND reports plain numbers. This module folds
//! both into a meters value the matcher can compare.

use crate::app::models::ElevationValue;

/// Normalize a source elevation to meters.
///
/// - missing input yields `0.0`;
/// - numeric input passes through unchanged, without rounding;
/// - string input is trimmed, a leading `+`/`-` sign is honored, the leading
///   numeric run is parsed (tolerating a trailing unit suffix), and the
///   result is rounded to the nearest whole meter;
/// - malformed strings produce `NaN`, which downstream comparisons treat as
///   "not close enough" rather than an error.
pub fn normalize_elevation(raw: Option<&ElevationValue>) -> f64 {
    match raw {
        None => 0.0,
        Some(ElevationValue::Meters(meters)) => *meters,
        Some(ElevationValue::Text(text)) => parse_elevation_text(text),
    }
}

fn parse_elevation_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    // Leading numeric run only, so "1563.6 m" parses as 1563.6
    let numeric_len = digits
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(digits.len());

    match digits[..numeric_len].parse::<f64>() {
        Ok(value) => (sign * value).round(),
        Err(_) => f64::NAN,
    }
}
