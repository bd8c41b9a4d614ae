//! Conversions between display text and `f64` values
//!
//! This module provides the numeric helpers the rest of the calculator builds on:
//! - [`format`]: formatting values for the display and parsing typed text back
//! - [`validate`]: length and decimal-point rules for text being typed
//!
//! # Fuzzy Zero
//!
//! The memory accumulator is compared against zero with [`is_fuzzy_zero`], never
//! with `==`. A value whose magnitude is at most [`FUZZY_ZERO_TOLERANCE`] counts
//! as zero, so `0.1 + 0.2 - 0.3` (about `5.5e-17`) leaves memory empty.
//!
//! Divisors use [`is_zero_divisor`] instead, which scales with the dividend: a
//! tiny divisor is fine as long as the quotient stays finite, so `1 ÷ 1e-14` is
//! `1e+14` while `1 ÷ 1e-320` is a division by zero.

pub mod format;
pub mod validate;

/// Maximum number of characters the display accepts while typing
pub const MAX_DIGIT_LENGTH: usize = 10;

/// The only decimal separator the display understands
pub const DECIMAL_SEPARATOR: char = '.';

/// What the display shows when a decimal point is typed into an empty entry
pub const ZERO_WITH_DECIMAL: &str = "0.";

/// Magnitudes at or below this are treated as zero
pub const FUZZY_ZERO_TOLERANCE: f64 = 1e-12;

/// Check whether `value` is indistinguishable from zero
pub fn is_fuzzy_zero(value: f64) -> bool {
    value.abs() <= FUZZY_ZERO_TOLERANCE
}

/// Check whether dividing `dividend` by `divisor` counts as division by zero:
/// the divisor is zero or subnormal, or the quotient overflows
pub fn is_zero_divisor(dividend: f64, divisor: f64) -> bool {
    divisor.abs() < f64::MIN_POSITIVE
        || (dividend.is_finite() && !(dividend / divisor).is_finite())
}
