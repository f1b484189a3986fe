//! Numeric cell cleaning.
//!
//! Spreadsheet exports carry thousands separators as ordinary or
//! non-breaking spaces and use a comma as the decimal separator. Cleaning
//! removes both spaces and maps `,` to `.` before parsing. Parsing is
//! lenient: anything that still fails yields `None` and the caller picks
//! the default.

/// Removes ordinary and non-breaking spaces, maps `,` to `.`.
pub fn clean_numeric_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != ' ' && c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses a finite decimal from a raw cell.
pub fn parse_decimal(raw: Option<&str>) -> Option<f64> {
    clean_numeric_text(raw?)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a time cost (minutes), rounded to 2 decimals. May be negative.
pub fn parse_time_cost(raw: Option<&str>) -> Option<f64> {
    parse_decimal(raw).map(round2).filter(|v| v.is_finite())
}

/// Parses a grade, truncating any fractional part. May be negative.
pub fn parse_grade(raw: Option<&str>) -> Option<i64> {
    parse_decimal(raw).map(|v| v.trunc() as i64)
}

/// Rounds to 2 decimals, ties to even. Never returns `-0.0`.
///
/// Magnitudes too large to scale by 100 are already integral and come back
/// unchanged.
pub fn round2(value: f64) -> f64 {
    if !(value * 100.0).is_finite() {
        return value;
    }
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numeric_text() {
        assert_eq!(clean_numeric_text("1 234,5"), "1234.5");
        assert_eq!(clean_numeric_text("2\u{a0}000"), "2000");
        assert_eq!(clean_numeric_text("3.25"), "3.25");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(Some("1,8")), Some(1.8));
        assert_eq!(parse_decimal(Some(" 21.15 ")), Some(21.15));
        assert_eq!(parse_decimal(Some("N/A")), None);
        assert_eq!(parse_decimal(Some("")), None);
        assert_eq!(parse_decimal(Some("nan")), None);
        assert_eq!(parse_decimal(Some("1.234,5")), None);
        assert_eq!(parse_decimal(None), None);
    }

    #[test]
    fn test_parse_time_cost_rounds() {
        assert_eq!(parse_time_cost(Some("1,456")), Some(1.46));
        assert_eq!(parse_time_cost(Some("-0,5")), Some(-0.5));
        assert_eq!(parse_time_cost(Some("abc")), None);
    }

    #[test]
    fn test_parse_grade_truncates() {
        assert_eq!(parse_grade(Some("4")), Some(4));
        assert_eq!(parse_grade(Some("4,0")), Some(4));
        assert_eq!(parse_grade(Some("3.7")), Some(3));
        assert_eq!(parse_grade(Some("-1")), Some(-1));
        assert_eq!(parse_grade(Some("IV")), None);
    }

    #[test]
    fn test_round2() {
        assert!((round2(1.005_1) - 1.01).abs() < 1e-10);
        assert!((round2(2.0) - 2.0).abs() < 1e-10);
        assert_eq!(round2(2.5), 2.5);
        assert!(round2(-0.001).is_sign_positive());
    }

    #[test]
    fn test_round2_huge_values_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-f64::MAX), -f64::MAX);
        assert_eq!(parse_time_cost(Some("1e307")), Some(1e307));
    }
}
