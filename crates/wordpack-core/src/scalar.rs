//! Scalar helpers shared by the vector, complex, and color types.

/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Relative-tolerance comparison: `|a - b| <= epsilon * max(|a|, |b|)`.
///
/// Bitwise-equal finite or infinite inputs always compare equal. NaN never
/// compares equal to anything, itself included.
#[inline]
pub fn approximately_equals(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= epsilon * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
    }

    #[test]
    fn approx_is_relative() {
        assert!(approximately_equals(1000.0, 1000.001, 1e-5));
        assert!(!approximately_equals(0.001, 0.002, 1e-5));
    }

    #[test]
    fn approx_zero_only_matches_zero() {
        assert!(approximately_equals(0.0, 0.0, 1e-5));
        assert!(approximately_equals(0.0, -0.0, 1e-5));
        assert!(!approximately_equals(0.0, 1e-30, 1e-5));
    }

    #[test]
    fn approx_infinities_and_nan() {
        assert!(approximately_equals(f32::INFINITY, f32::INFINITY, 1e-5));
        assert!(!approximately_equals(f32::INFINITY, f32::NEG_INFINITY, 1e-5));
        assert!(!approximately_equals(f32::NAN, f32::NAN, 1e-5));
    }
}
