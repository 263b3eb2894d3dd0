//! Quaternions over a real coefficient domain.
//!
//! Multiplication is not commutative, so quaternions form a ring but not a
//! `Coefficient`: polynomials over them support addition, multiplication,
//! evaluation and printing, but not division.

use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::tolerance::Tolerance;
use crate::traits::{hypercomplex_sign, Classify, Ring, Sign};

/// The quaternion `w + x·i + y·j + z·k`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Quaternion<F> {
    /// Real component.
    pub w: F,
    /// Coefficient of `i`.
    pub x: F,
    /// Coefficient of `j`.
    pub y: F,
    /// Coefficient of `k`.
    pub z: F,
}

impl<F> Quaternion<F> {
    /// Creates a quaternion from its four components.
    pub const fn new(w: F, x: F, y: F, z: F) -> Self {
        Self { w, x, y, z }
    }
}

impl<F: Ring> Quaternion<F> {
    /// Embeds a real number.
    pub fn real(w: F) -> Self {
        Self::new(w, F::zero(), F::zero(), F::zero())
    }

    fn components(&self) -> [F; 4] {
        [
            self.w.clone(),
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
        ]
    }
}

impl<F: Ring> Add for Quaternion<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<F: Ring> Sub for Quaternion<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<F: Ring> Neg for Quaternion<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Hamilton product.
impl<F: Ring> Mul for Quaternion<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [a1, b1, c1, d1] = self.components();
        let [a2, b2, c2, d2] = rhs.components();

        Self::new(
            a1.clone() * a2.clone()
                - b1.clone() * b2.clone()
                - c1.clone() * c2.clone()
                - d1.clone() * d2.clone(),
            a1.clone() * b2.clone()
                + b1.clone() * a2.clone()
                + c1.clone() * d2.clone()
                - d1.clone() * c2.clone(),
            a1.clone() * c2.clone()
                - b1.clone() * d2.clone()
                + c1.clone() * a2.clone()
                + d1.clone() * b2.clone(),
            a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        )
    }
}

impl<F: Ring> Ring for Quaternion<F> {
    fn zero() -> Self {
        Self::real(F::zero())
    }

    fn one() -> Self {
        Self::real(F::one())
    }

    fn is_zero(&self) -> bool {
        self.components().iter().all(Ring::is_zero)
    }

    fn is_one(&self) -> bool {
        self.w.is_one() && [&self.x, &self.y, &self.z].into_iter().all(Ring::is_zero)
    }
}

impl<F: Classify> Classify for Quaternion<F> {
    fn is_zero_within(&self, tol: &Tolerance) -> bool {
        self.components().iter().all(|c| c.is_zero_within(tol))
    }

    fn is_one_within(&self, tol: &Tolerance) -> bool {
        self.w.is_one_within(tol)
            && [&self.x, &self.y, &self.z]
                .into_iter()
                .all(|c| c.is_zero_within(tol))
    }

    fn sign_within(&self, tol: &Tolerance) -> Sign {
        hypercomplex_sign(&self.components(), tol)
    }
}

/// Writes `(w,x,y,z)`. Signed zeros print as `0`.
impl<F: Ring + Display> Display for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if c.is_zero() {
                Display::fmt(&F::zero(), f)?;
            } else {
                Display::fmt(c, f)?;
            }
        }
        f.write_str(")")
    }
}
