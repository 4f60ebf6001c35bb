// Parsing and statistics helpers.
//
// This module centralizes all the "dirty" CSV value handling so the rest of
// the code can assume clean, typed values.
use num_format::{Locale, ToFormattedString};
use std::cmp::Ordering;

/// Parse free-form monetary text into a number.
///
/// - Strips every `$` and `,` wherever they occur.
/// - Trims surrounding whitespace.
/// - An empty or unparseable residual is missing, never an error; the
///   loader fills missing money with 0 afterwards.
/// - Only `.` is accepted as the decimal separator.
pub fn parse_money(s: Option<&str>) -> Option<f64> {
    let cleaned: String = s?.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Plain numeric coercion, no currency stripping. Used for the quantity
/// column, where `"1,000"` style formatting is not expected.
pub fn coerce_numeric(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Second stage of the cleaning pass: replace a missing value with its
/// column default (0 for money, 1 for quantity).
pub fn fill_missing(v: Option<f64>, default: f64) -> f64 {
    v.unwrap_or(default)
}

/// Arithmetic mean. `None` for an empty slice so callers render an explicit
/// "no data" state instead of a bogus zero.
pub fn mean(v: &[f64]) -> Option<f64> {
    if v.is_empty() {
        return None;
    }
    Some(v.iter().sum::<f64>() / v.len() as f64)
}

/// Sort values ascending for quantile lookups. NaN compares equal; cleaned
/// datasets never contain NaN.
pub fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v
}

/// Linear-interpolated percentile over an already-sorted slice.
/// `p` is clamped to `[0, 1]`; an empty slice yields 0.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted_values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted_values[lo];
    }
    let frac = rank - lo as f64;
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * frac
}

/// Round to two decimals, the precision of the summary table.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimal places plus locale-aware thousands separators
    // (e.g. `1,234,567.89`).
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // `num-format` inserts the commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `1,245 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_money_strips_currency_formatting() {
        assert_eq!(parse_money(Some("$1,234.50")), Some(1234.50));
        assert_eq!(parse_money(Some("$4,500,000")), Some(4500000.0));
        assert_eq!(parse_money(Some("  $250 ")), Some(250.0));
    }

    #[test]
    fn parse_money_passes_plain_numbers_through() {
        assert_eq!(parse_money(Some("1234.5")), Some(1234.5));
        assert_eq!(parse_money(Some("-12.75")), Some(-12.75));
    }

    #[test]
    fn parse_money_blank_is_missing() {
        assert_eq!(parse_money(None), None);
        assert_eq!(parse_money(Some("")), None);
        assert_eq!(parse_money(Some("   ")), None);
        assert_eq!(parse_money(Some("$")), None);
        assert_eq!(parse_money(Some(" , ")), None);
    }

    #[test]
    fn parse_money_non_numeric_is_missing() {
        assert_eq!(parse_money(Some("n/a")), None);
        assert_eq!(parse_money(Some("12x")), None);
        assert_eq!(parse_money(Some("inf")), None);
    }

    #[test]
    fn coerce_numeric_defaults_via_fill_missing() {
        assert_eq!(coerce_numeric(Some("3")), Some(3.0));
        assert_eq!(coerce_numeric(Some("n/a")), None);
        assert_eq!(fill_missing(coerce_numeric(Some("n/a")), 1.0), 1.0);
        assert_eq!(fill_missing(coerce_numeric(None), 1.0), 1.0);
        assert_eq!(fill_missing(parse_money(Some("")), 0.0), 0.0);
    }

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn percentile_interpolates() {
        let v = sorted(vec![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(percentile(&v, 0.0), 1.0);
        assert_eq!(percentile(&v, 0.25), 1.75);
        assert_eq!(percentile(&v, 0.5), 2.5);
        assert_eq!(percentile(&v, 1.0), 4.0);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    #[test]
    fn format_number_inserts_separators() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(1234567.891, 0), "1,234,568");
        assert_eq!(format_number(-4500.5, 0), "-4,501");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn round2_matches_summary_precision() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(1234.5678), 1234.57);
    }
}
