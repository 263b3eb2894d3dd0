//! Operators between a polynomial and a single coefficient.
//!
//! `+` and `-` touch only the constant term; `*`, `/` and `%` act on every
//! coefficient. Scalar division by zero falls through to the coefficient
//! type's own behavior.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use statpoly_rings::traits::{Coefficient, Ring};
use statpoly_rings::{Q, Z};

use crate::capacity;
use crate::poly::Poly;

impl<T: Ring, const N: usize> Poly<T, N> {
    /// Adds a scalar to the constant term.
    ///
    /// Unlike `+`, this also accepts `N == 0`: the result capacity `P` is
    /// `max(N, 1)`, so an empty polynomial becomes the constant `c`.
    #[must_use]
    pub fn add_scalar<const P: usize>(&self, c: T) -> Poly<T, P> {
        const { assert!(P == capacity::scalar(N), "scalar sum capacity must be max(N, 1)") }
        let mut result: Poly<T, P> = Poly::from_coeffs(self.coeffs.iter().cloned());
        result.update(0, |c0| c0 + c);
        result
    }

    /// Subtracts a scalar from the constant term, see [`Poly::add_scalar`].
    #[must_use]
    pub fn sub_scalar<const P: usize>(&self, c: T) -> Poly<T, P> {
        self.add_scalar(-c)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        self.map(|a| a.clone() * c.clone())
    }
}

impl<T: Ring, const N: usize> Add<T> for Poly<T, N> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Ring, const N: usize> Sub<T> for Poly<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Ring, const N: usize> Mul<T> for Poly<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Coefficient, const N: usize> Div<T> for Poly<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Coefficient, const N: usize> Rem<T> for Poly<T, N> {
    type Output = Self;

    fn rem(mut self, rhs: T) -> Self::Output {
        self %= rhs;
        self
    }
}

impl<T: Ring, const N: usize> AddAssign<T> for Poly<T, N> {
    fn add_assign(&mut self, rhs: T) {
        const { assert!(N >= 1, "use add_scalar to add a scalar to an empty polynomial") }
        self.update(0, |c| c + rhs);
    }
}

impl<T: Ring, const N: usize> SubAssign<T> for Poly<T, N> {
    fn sub_assign(&mut self, rhs: T) {
        const { assert!(N >= 1, "use sub_scalar to subtract a scalar from an empty polynomial") }
        self.update(0, |c| c - rhs);
    }
}

impl<T: Ring, const N: usize> MulAssign<T> for Poly<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..N {
            self.update(i, |c| c * rhs.clone());
        }
    }
}

impl<T: Coefficient, const N: usize> DivAssign<T> for Poly<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for i in 0..N {
            self.update(i, |c| c / rhs.clone());
        }
    }
}

/// Coefficient-wise remainder for integer-like domains, so that
/// `a == (a / b) * b + a % b` holds term by term. In a field every
/// remainder is zero.
impl<T: Coefficient, const N: usize> RemAssign<T> for Poly<T, N> {
    fn rem_assign(&mut self, rhs: T) {
        if !T::IS_INTEGER_LIKE {
            *self = Self::zero();
            return;
        }
        for i in 0..N {
            self.update(i, |c| {
                let q = c.clone() / rhs.clone();
                c - rhs.clone() * q
            });
        }
    }
}

// Scalar on the left. Coherence only allows these for concrete types.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Add<Poly<$t, N>> for $t {
            type Output = Poly<$t, N>;

            fn add(self, rhs: Poly<$t, N>) -> Self::Output {
                rhs + self
            }
        }

        impl<const N: usize> Sub<Poly<$t, N>> for $t {
            type Output = Poly<$t, N>;

            fn sub(self, rhs: Poly<$t, N>) -> Self::Output {
                -rhs + self
            }
        }

        impl<const N: usize> Mul<Poly<$t, N>> for $t {
            type Output = Poly<$t, N>;

            fn mul(self, rhs: Poly<$t, N>) -> Self::Output {
                rhs.scale(&self)
            }
        }
    )*};
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, f32, f64, Z, Q);
