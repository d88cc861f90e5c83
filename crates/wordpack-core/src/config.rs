//! Numeric tolerance configuration.

use crate::error::ValueError;

/// Tolerances used by approximate comparison and normalization.
///
/// Validated at construction; all values are immutable after creation.
/// Operations that take no explicit tolerance use [`Tolerance::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance for `approximately_equals`.
    ///
    /// Two scalars compare equal when `|a - b| <= epsilon * max(|a|, |b|)`.
    /// Default: `1e-5`.
    pub epsilon: f32,

    /// Magnitude below which normalization saturates to zero instead of
    /// dividing.
    ///
    /// Default: `1e-5`.
    pub zero_threshold: f32,
}

impl Tolerance {
    /// Default relative comparison tolerance.
    pub const DEFAULT_EPSILON: f32 = 1e-5;

    /// Default normalization cutoff.
    pub const DEFAULT_ZERO_THRESHOLD: f32 = 1e-5;

    /// Create a tolerance, rejecting negative or non-finite parameters.
    pub fn new(epsilon: f32, zero_threshold: f32) -> Result<Self, ValueError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ValueError::InvalidTolerance {
                reason: format!("epsilon must be finite and >= 0, got {epsilon}"),
            });
        }
        if !zero_threshold.is_finite() || zero_threshold < 0.0 {
            return Err(ValueError::InvalidTolerance {
                reason: format!("zero_threshold must be finite and >= 0, got {zero_threshold}"),
            });
        }
        Ok(Self {
            epsilon,
            zero_threshold,
        })
    }

    /// Same zero threshold, different epsilon.
    pub fn with_epsilon(self, epsilon: f32) -> Result<Self, ValueError> {
        Self::new(epsilon, self.zero_threshold)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            zero_threshold: Self::DEFAULT_ZERO_THRESHOLD,
        }
    }
}
