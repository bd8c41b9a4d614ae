//! Display formatting and parsing
//!
//! Results are shown in general notation: fixed point while the decimal exponent
//! fits in the requested number of significant digits, scientific (`1.5e+12`,
//! `2e-05`) otherwise. Trailing fractional zeros are always dropped.

use super::DECIMAL_SEPARATOR;

/// Format `value` with at most `max_digits` significant digits.
///
/// ```
/// use calctty::number::format::format_number;
///
/// assert_eq!(format_number(42.0, 10), "42");
/// assert_eq!(format_number(3.14159, 3), "3.14");
/// assert_eq!(format_number(1e10, 10), "1e+10");
/// ```
pub fn format_number(value: f64, max_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = max_digits.max(1);

    // Round once in scientific form so the exponent reflects carries (9.99.. -> 10)
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_fraction(&fixed).to_string()
    }
}

/// Drop trailing zeros after the decimal separator, and the separator itself if
/// nothing is left behind it
fn trim_fraction(text: &str) -> &str {
    if text.contains(DECIMAL_SEPARATOR) {
        text.trim_end_matches('0').trim_end_matches(DECIMAL_SEPARATOR)
    } else {
        text
    }
}

/// Parse display text into a value. Returns `None` for empty or non-numeric text.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Check if `text` parses as a number
pub fn is_valid_number(text: &str) -> bool {
    parse_number(text).is_some()
}

/// Strip one trailing decimal separator (`"42."` becomes `"42"`)
pub fn remove_trailing_decimal(text: &str) -> &str {
    text.strip_suffix(DECIMAL_SEPARATOR).unwrap_or(text)
}

/// Check if `text` already contains a decimal separator
pub fn has_decimal_point(text: &str) -> bool {
    text.contains(DECIMAL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers_without_fraction() {
        assert_eq!(format_number(42.0, 10), "42");
        assert_eq!(format_number(-8.0, 10), "-8");
        assert_eq!(format_number(0.0, 10), "0");
        assert_eq!(format_number(1234567890.0, 10), "1234567890");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5, 10), "0.5");
        assert_eq!(format_number(0.25, 10), "0.25");
        assert_eq!(format_number(3.14159, 3), "3.14");
        assert_eq!(format_number(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_number(0.0001, 10), "0.0001");
    }

    #[test]
    fn test_format_switches_to_scientific() {
        assert_eq!(format_number(1e10, 10), "1e+10");
        assert_eq!(format_number(12345678901.0, 10), "1.23456789e+10");
        assert_eq!(format_number(0.00001, 10), "1e-05");
        assert_eq!(format_number(-2.5e-7, 10), "-2.5e-07");
    }

    #[test]
    fn test_format_rounding_carries_into_exponent() {
        assert_eq!(format_number(9.99999999999, 10), "10");
        assert_eq!(format_number(0.1 + 0.2, 10), "0.3");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY, 10), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 10), "-inf");
        assert_eq!(format_number(f64::NAN, 10), "nan");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42.5"), Some(42.5));
        assert_eq!(parse_number("-5.5"), Some(-5.5));
        assert_eq!(parse_number("0."), Some(0.0));
        assert_eq!(parse_number(" 7 "), Some(7.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("division by zero"), None);
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("42"));
        assert!(is_valid_number("3.14"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("abc"));
    }

    #[test]
    fn test_remove_trailing_decimal() {
        assert_eq!(remove_trailing_decimal("42."), "42");
        assert_eq!(remove_trailing_decimal("42.5"), "42.5");
        assert_eq!(remove_trailing_decimal("42"), "42");
        assert_eq!(remove_trailing_decimal("."), "");
    }

    #[test]
    fn test_has_decimal_point() {
        assert!(has_decimal_point("3.14"));
        assert!(has_decimal_point("42."));
        assert!(!has_decimal_point("42"));
        assert!(!has_decimal_point(""));
    }
}
