// Parsing, arithmetic and formatting helpers.
//
// Loader code relies on the forgiving parsers here so that the rest of the
// pipeline only ever sees typed values; the scoring code relies on the
// guarded arithmetic so that no NaN or infinity escapes into a profile.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64`.
///
/// - Trims whitespace.
/// - Accepts anything `str::parse::<f64>` does, scientific notation included.
/// - Returns `None` for empty input, garbage, or a non-finite result.
///
/// Thousands separators are not stripped: `"1,234"` is not a number here.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    // "inf" and "NaN" parse fine but are never a planted area.
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_i32_safe(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Percentage change from `from` to `to`; 0 when `from` is not positive.
pub fn pct_change(from: f64, to: f64) -> f64 {
    if from > 0.0 {
        (to - from) / from * 100.0
    } else {
        0.0
    }
}

pub fn average(v: &[f64]) -> f64 {
    // Empty input averages to 0, never NaN.
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// Population standard deviation; 0 for an empty slice.
pub fn std_dev(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    let mean = average(v);
    // Divide by n, not n - 1.
    let variance = v.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / v.len() as f64;
    variance.sqrt()
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus locale-aware thousands separators (`1,234,567.89`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    // Split into integer and fractional parts, group only the integer side.
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_pct(n: f64) -> String {
    format!("{}%", format_number(n, 1))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_accepts_plain_and_scientific_numbers() {
        assert_eq!(parse_f64_safe(Some(" 1234.5 ")), Some(1234.5));
        assert_eq!(parse_f64_safe(Some("1.5e5")), Some(150_000.0));
        assert_eq!(parse_f64_safe(Some("2E+04")), Some(20_000.0));
        assert_eq!(parse_f64_safe(Some("-3")), Some(-3.0));
    }

    #[test]
    fn parse_f64_rejects_separators_and_garbage() {
        assert_eq!(parse_f64_safe(Some("1,234")), None);
        assert_eq!(parse_f64_safe(Some("n/a")), None);
        assert_eq!(parse_f64_safe(Some("inf")), None);
        assert_eq!(parse_f64_safe(Some("NaN")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn parse_i32_trims() {
        assert_eq!(parse_i32_safe(Some(" 2010 ")), Some(2010));
        assert_eq!(parse_i32_safe(Some("2010.5")), None);
    }

    #[test]
    fn pct_change_guards_zero_base() {
        assert_eq!(pct_change(0.0, 500.0), 0.0);
        assert!((pct_change(100.0, 150.0) - 50.0).abs() < 1e-9);
        assert!((pct_change(200.0, 100.0) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn std_dev_is_population() {
        assert_eq!(std_dev(&[]), 0.0);
        assert!((std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
        assert_eq!(format_number(0.0, 1), "0.0");
        assert_eq!(format_pct(12.345), "12.3%");
    }
}
