//! Polynomial-by-polynomial addition, subtraction and multiplication.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use statpoly_rings::traits::Ring;

use crate::capacity;
use crate::poly::Poly;

impl<T: Ring, const N: usize> Poly<T, N> {
    /// Adds two polynomials of possibly different capacities.
    ///
    /// The result capacity `P` must be `max(N, M)`.
    #[must_use]
    pub fn add_poly<const M: usize, const P: usize>(&self, other: &Poly<T, M>) -> Poly<T, P> {
        const { assert!(P == capacity::sum(N, M), "sum capacity must be max(N, M)") }
        Poly {
            coeffs: std::array::from_fn(|i| self.coeff(i) + other.coeff(i)),
        }
    }

    /// Subtracts two polynomials of possibly different capacities.
    ///
    /// The result capacity `P` must be `max(N, M)`.
    #[must_use]
    pub fn sub_poly<const M: usize, const P: usize>(&self, other: &Poly<T, M>) -> Poly<T, P> {
        const { assert!(P == capacity::sum(N, M), "difference capacity must be max(N, M)") }
        Poly {
            coeffs: std::array::from_fn(|i| self.coeff(i) - other.coeff(i)),
        }
    }

    /// Multiplies two polynomials by the schoolbook method.
    ///
    /// The result capacity `P` must be `N + M - 1`.
    #[must_use]
    pub fn mul_poly<const M: usize, const P: usize>(&self, other: &Poly<T, M>) -> Poly<T, P> {
        const { assert!(P == capacity::product(N, M), "product capacity must be N + M - 1") }

        let mut result = Poly::zero();
        if self.is_zero() || other.is_zero() {
            return result;
        }

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result.update(i + j, |acc| acc + a.clone() * b.clone());
            }
        }

        result
    }

    /// Multiplies by `other`, keeping the capacity `N`.
    ///
    /// Terms of degree `N` and above are never computed, so the caller must
    /// know the product fits (`deg(self) + deg(other) < N`).
    #[must_use]
    pub fn mul_in_capacity<const M: usize>(&self, other: &Poly<T, M>) -> Self {
        let mut result = Self::zero();

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().take(N - i).enumerate() {
                result.update(i + j, |acc| acc + a.clone() * b.clone());
            }
        }

        result
    }
}

impl<T: Ring, const N: usize> Add for Poly<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Ring, const N: usize> Sub for Poly<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Ring, const N: usize> AddAssign for Poly<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (i, c) in rhs.coeffs.into_iter().enumerate() {
            self.update(i, |acc| acc + c);
        }
    }
}

impl<T: Ring, const N: usize> SubAssign for Poly<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (i, c) in rhs.coeffs.into_iter().enumerate() {
            self.update(i, |acc| acc - c);
        }
    }
}

impl<T: Ring, const N: usize> Neg for Poly<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Poly {
            coeffs: self.coeffs.map(|c| -c),
        }
    }
}

impl<T: Ring, const N: usize> num_traits::Zero for Poly<T, N> {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}
