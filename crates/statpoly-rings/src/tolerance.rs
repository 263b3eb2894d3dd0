//! Float tolerance configuration.
//!
//! Floating point coefficients accumulate rounding noise, so "is zero" and
//! "is one" are decided against configurable epsilons instead of exact
//! comparison. NaN, infinities and subnormals count as zero.

use thiserror::Error;

/// Errors from building a `Tolerance`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ToleranceError {
    /// An epsilon was negative, NaN or infinite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidEpsilon {
        /// Which field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Thresholds for approximate zero/one tests on floats.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// `|v| < absolute_epsilon` counts as zero.
    pub absolute_epsilon: f64,
    /// Relative difference from 1 below this counts as one.
    pub relative_epsilon: f64,
}

impl Tolerance {
    /// The thresholds used when none are given: 1e-11 for both.
    pub const DEFAULT: Self = Self {
        absolute_epsilon: 1e-11,
        relative_epsilon: 1e-11,
    };

    /// Exact comparison (subnormals, NaN and infinities still count as zero).
    pub const EXACT: Self = Self {
        absolute_epsilon: 0.0,
        relative_epsilon: 0.0,
    };

    /// Creates a tolerance, validating both epsilons.
    ///
    /// # Errors
    ///
    /// Returns `ToleranceError::InvalidEpsilon` if either value is negative,
    /// NaN or infinite.
    pub fn new(absolute_epsilon: f64, relative_epsilon: f64) -> Result<Self, ToleranceError> {
        let tol = Self {
            absolute_epsilon,
            relative_epsilon,
        };
        tol.validate()?;
        Ok(tol)
    }

    /// Checks that both epsilons are usable.
    ///
    /// Useful after deserializing a tolerance from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ToleranceError::InvalidEpsilon` for the first bad field.
    pub fn validate(&self) -> Result<(), ToleranceError> {
        for (name, value) in [
            ("absolute_epsilon", self.absolute_epsilon),
            ("relative_epsilon", self.relative_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ToleranceError::InvalidEpsilon { name, value });
            }
        }
        Ok(())
    }

    /// Returns true if `v` is zero, subnormal, NaN, infinite, or smaller
    /// in magnitude than `absolute_epsilon`.
    #[must_use]
    pub fn is_zero(&self, v: f64) -> bool {
        if !v.is_normal() {
            return true;
        }
        v.abs() < self.absolute_epsilon
    }

    /// Returns true if `v` equals 1 up to `relative_epsilon`.
    #[must_use]
    pub fn is_one(&self, v: f64) -> bool {
        v == 1.0 || relative_difference(1.0, v) < self.relative_epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `|a - b| / min(|a|, |b|)`, saturating for non-finite input.
fn relative_difference(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::MAX;
    }
    let denom = a.abs().min(b.abs()).max(f64::MIN_POSITIVE);
    ((a - b).abs() / denom).min(f64::MAX)
}
