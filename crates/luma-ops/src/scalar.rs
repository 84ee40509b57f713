//! Scalar 8-bit arithmetic with explicit overflow semantics.
//!
//! These six operations exist to teach what happens at the edges of the
//! `u8` range: where saturation clamps, where modular arithmetic wraps, and
//! how multiplication and division are kept in range. The exact wrap,
//! saturate, and rounding rules here are load-bearing; the interactive
//! arithmetic view reproduces them digit for digit.

/// `v1 + v2`, clamped to 255 on overflow.
///
/// ```
/// assert_eq!(luma_ops::saturating_add(250, 10), 255);
/// assert_eq!(luma_ops::saturating_add(100, 50), 150);
/// ```
#[inline]
pub fn saturating_add(v1: u8, v2: u8) -> u8 {
    v1.saturating_add(v2)
}

/// `(v1 + v2) mod 256`.
///
/// ```
/// assert_eq!(luma_ops::wrapping_add(250, 10), 4);
/// ```
#[inline]
pub fn wrapping_add(v1: u8, v2: u8) -> u8 {
    v1.wrapping_add(v2)
}

/// `(v1 - v2) mod 256`, so going below zero wraps to the top of the range.
///
/// ```
/// assert_eq!(luma_ops::wrapping_sub(10, 20), 246);
/// ```
#[inline]
pub fn wrapping_sub(v1: u8, v2: u8) -> u8 {
    v1.wrapping_sub(v2)
}

/// `|v1 - v2|`. Never overflows, which is why difference images use it.
///
/// ```
/// assert_eq!(luma_ops::absolute_diff(10, 250), 240);
/// ```
#[inline]
pub fn absolute_diff(v1: u8, v2: u8) -> u8 {
    v1.abs_diff(v2)
}

/// `round(v1 * v2 / 255)`: multiplication treating 255 as 1.0.
///
/// Interpreting each operand as a fraction of full scale keeps the product
/// in range without clamping.
///
/// ```
/// assert_eq!(luma_ops::scaled_multiply(250, 10), 10);
/// assert_eq!(luma_ops::scaled_multiply(255, 255), 255);
/// ```
#[inline]
pub fn scaled_multiply(v1: u8, v2: u8) -> u8 {
    (v1 as f64 * v2 as f64 / 255.0).round() as u8
}

/// `round(v1 / v2)` clamped to 255, with division by zero pinned to 255.
///
/// The x/0 convention is a documented teaching convention, not IEEE
/// semantics: "dividing by nothing leaves the brightest possible value".
///
/// ```
/// assert_eq!(luma_ops::saturating_divide(250, 10), 25);
/// assert_eq!(luma_ops::saturating_divide(7, 0), 255);
/// ```
#[inline]
pub fn saturating_divide(v1: u8, v2: u8) -> u8 {
    if v2 == 0 {
        return 255;
    }
    (v1 as f64 / v2 as f64).round().min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_variants_at_the_boundary() {
        assert_eq!(saturating_add(255, 255), 255);
        assert_eq!(wrapping_add(255, 255), 254);
        assert_eq!(saturating_add(0, 0), 0);
        assert_eq!(wrapping_add(128, 128), 0);
    }

    #[test]
    fn test_wrapping_sub_goes_negative() {
        assert_eq!(wrapping_sub(0, 1), 255);
        assert_eq!(wrapping_sub(250, 10), 240);
        assert_eq!(wrapping_sub(10, 10), 0);
    }

    #[test]
    fn test_absolute_diff_is_order_free() {
        assert_eq!(absolute_diff(250, 10), absolute_diff(10, 250));
        assert_eq!(absolute_diff(0, 255), 255);
    }

    #[test]
    fn test_scaled_multiply_rounds() {
        // 100 * 100 / 255 = 39.215... -> 39
        assert_eq!(scaled_multiply(100, 100), 39);
        // 128 * 255 / 255 = 128 exactly
        assert_eq!(scaled_multiply(128, 255), 128);
        assert_eq!(scaled_multiply(0, 200), 0);
    }

    #[test]
    fn test_divide_rounds_and_pins_zero_divisor() {
        assert_eq!(saturating_divide(100, 3), 33);
        assert_eq!(saturating_divide(200, 3), 67);
        assert_eq!(saturating_divide(0, 0), 255);
        assert_eq!(saturating_divide(255, 1), 255);
    }
}
