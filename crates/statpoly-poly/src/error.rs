//! Errors from polynomial operations.

use thiserror::Error;

/// Errors that the checked polynomial operations report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// The quotient's degree does not fit its declared capacity. This happens
    /// when the divisor's capacity exceeds its degree + 1.
    #[error("quotient of degree {degree} does not fit in capacity {capacity}")]
    QuotientOverflow {
        /// Degree of the quotient.
        degree: usize,
        /// Declared quotient capacity.
        capacity: usize,
    },

    /// A resize would drop a non-zero coefficient.
    #[error("non-zero coefficient at index {index} does not fit in capacity {capacity}")]
    Truncated {
        /// Index of the highest non-zero coefficient.
        index: usize,
        /// Target capacity.
        capacity: usize,
    },

    /// A coefficient index is outside the polynomial's capacity.
    #[error("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The polynomial's capacity.
        capacity: usize,
    },
}
