//! Lenient numeric token parsing.
//!
//! Transcript figures are sometimes dashes, placeholders, or carry trailing
//! noise. These helpers never fail: a token with no numeric prefix becomes
//! `0`.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .unwrap_or_else(|_| unreachable!())
});

/// Parses the longest numeric prefix of `token` as a float.
///
/// Leading whitespace is ignored. `"8.5-"` parses as `8.5`; `"--"` and
/// `""` parse as `0`.
pub fn parse_leading_float(token: &str) -> f64 {
    LEADING_FLOAT
        .find(token.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses an unsigned integer, yielding `0` on failure.
pub fn parse_count(token: &str) -> u64 {
    token.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert!((parse_leading_float("7.50") - 7.5).abs() < f64::EPSILON);
        assert!((parse_leading_float("64.00") - 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_numeric_prefix_only() {
        assert!((parse_leading_float("8.5-") - 8.5).abs() < f64::EPSILON);
        assert!((parse_leading_float("1.2.3") - 1.2).abs() < f64::EPSILON);
        assert!((parse_leading_float(" 9") - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_tokens_become_zero() {
        assert!(parse_leading_float("--").abs() < f64::EPSILON);
        assert!(parse_leading_float("-").abs() < f64::EPSILON);
        assert!(parse_leading_float("").abs() < f64::EPSILON);
        assert!(parse_leading_float(".").abs() < f64::EPSILON);
    }

    #[test]
    fn counts_fall_back_to_zero() {
        assert_eq!(parse_count("3200"), 3200);
        assert_eq!(parse_count("x"), 0);
        assert_eq!(parse_count("99999999999999999999999"), 0);
    }
}
