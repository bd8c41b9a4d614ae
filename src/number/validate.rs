//! Typing rules for the display entry
//!
//! These checks look only at the text, never at its numeric value. Lengths are
//! counted in characters.

use super::format::has_decimal_point;

/// Check whether another digit fits in the entry
pub fn can_add_digit(current: &str, max_length: usize) -> bool {
    !is_length_exceeded(current, max_length)
}

/// Check whether a decimal point may be typed.
///
/// Rejected when the entry already has one, or when it would leave no room for a
/// digit after the point.
pub fn can_add_decimal_point(current: &str, max_length: usize) -> bool {
    if has_decimal_point(current) {
        return false;
    }
    current.chars().count() < max_length.saturating_sub(1)
}

pub fn is_not_empty(text: &str) -> bool {
    !text.is_empty()
}

/// Check whether `text` has reached `max_length`
pub fn is_length_exceeded(text: &str, max_length: usize) -> bool {
    text.chars().count() >= max_length
}
