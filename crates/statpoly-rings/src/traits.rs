//! Coefficient capability traits.
//!
//! These traits are the only thing the polynomial algorithms know about
//! their coefficients. Any type implementing `Ring` can be stored in a
//! polynomial and take part in addition, subtraction and multiplication;
//! `Coefficient` adds division, and `Classify` adds the sign information the
//! pretty-printer needs.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::division::DivisionStrategy;
use crate::tolerance::Tolerance;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating point domains only satisfy these up to rounding. `is_zero` and
/// `is_one` still compare exactly: degree and division depend on them, and
/// a small non-zero coefficient is still a coefficient. Approximate tests
/// belong to `Classify`.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring whose elements can be divided.
///
/// For fields (`f64`, `Q`, complex numbers) division is exact. For
/// integer-like domains it truncates, and polynomial division has to fall
/// back to pseudo-division to stay inside the ring. The strategy is chosen
/// by the `Division` associated type, never by inspecting values.
pub trait Coefficient: Ring + Div<Output = Self> {
    /// The polynomial division algorithm used for this domain.
    type Division: DivisionStrategy;

    /// True iff this is an integer domain (truncating division).
    const IS_INTEGER_LIKE: bool = <Self::Division as DivisionStrategy>::INTEGER_LIKE;
}

/// Three-valued sign of a coefficient.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    /// Strictly negative.
    Negative,
    /// Zero (within tolerance).
    Zero,
    /// Positive, or "not negative" for unordered domains.
    Positive,
}

impl Sign {
    /// The sign of a value compared against zero.
    #[must_use]
    pub fn from_ordering(ord: std::cmp::Ordering) -> Self {
        match ord {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }

    /// Returns true for `Sign::Negative`.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Sign classification and rendering used by the pretty-printer.
///
/// Only the printer needs this; arithmetic never looks at signs.
pub trait Classify: Ring + Display {
    /// Returns true if this is zero within the given tolerance.
    fn is_zero_within(&self, _tol: &Tolerance) -> bool {
        self.is_zero()
    }

    /// Returns true if this is one within the given tolerance.
    fn is_one_within(&self, _tol: &Tolerance) -> bool {
        self.is_one()
    }

    /// Classifies the sign of this value.
    fn sign_within(&self, tol: &Tolerance) -> Sign;

    /// Classifies the sign with the default tolerance.
    fn sign(&self) -> Sign {
        self.sign_within(&Tolerance::DEFAULT)
    }

    /// Returns true if the printer should render this value with a minus.
    fn is_negative(&self) -> bool {
        self.sign().is_negative()
    }

    /// Writes this value as a polynomial coefficient.
    ///
    /// The formatter's flags (precision in particular) are passed through.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    fn fmt_coeff(&self, f: &mut fmt::Formatter<'_>, _tol: &Tolerance) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// The sign rule for hyper-complex numbers (quaternions, octonions, ...).
///
/// A value is negative only if its first non-zero component is negative
/// and strictly negative components are at least as many as strictly
/// positive ones. All-zero components give `Sign::Zero`.
pub fn hypercomplex_sign<F: Classify>(components: &[F], tol: &Tolerance) -> Sign {
    let Some(first) = components.iter().find(|c| !c.is_zero_within(tol)) else {
        return Sign::Zero;
    };

    let negative = components
        .iter()
        .filter(|c| c.sign_within(tol) == Sign::Negative)
        .count();
    let positive = components
        .iter()
        .filter(|c| c.sign_within(tol) == Sign::Positive)
        .count();

    if first.sign_within(tol) == Sign::Negative && negative >= positive {
        Sign::Negative
    } else {
        Sign::Positive
    }
}
