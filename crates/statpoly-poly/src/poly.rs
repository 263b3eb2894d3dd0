//! Fixed-capacity dense univariate polynomials.
//!
//! A `Poly<T, N>` owns exactly `N` coefficients in ascending degree order.
//! The capacity never changes; the degree is recomputed from the
//! coefficients whenever it is needed, so a polynomial with degree `d` may
//! carry `N - d - 1` zero coefficients of headroom.

use std::mem;
use std::ops::{Index, IndexMut};

use statpoly_rings::embed::Embed;
use statpoly_rings::traits::Ring;

use crate::error::PolyError;
use crate::horner;

/// A dense univariate polynomial with at most `N` coefficients.
///
/// `coeffs[i]` is the coefficient of `x^i`.
#[derive(Clone, Debug)]
pub struct Poly<T: Ring, const N: usize> {
    pub(crate) coeffs: [T; N],
}

impl<T: Ring, const N: usize> Poly<T, N> {
    /// The capacity `N`.
    pub const CAPACITY: usize = N;

    /// Creates a polynomial from exactly `N` coefficients.
    #[must_use]
    pub const fn new(coeffs: [T; N]) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from a coefficient sequence, low order first.
    ///
    /// Missing coefficients are zero; coefficients beyond the capacity are
    /// dropped without error.
    pub fn from_coeffs<I>(coeffs: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = coeffs.into_iter();
        Self {
            coeffs: std::array::from_fn(|_| iter.next().unwrap_or_else(T::zero)),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: std::array::from_fn(|_| T::zero()),
        }
    }

    /// Creates the constant polynomial `c`.
    ///
    /// Rejected at compile time when `N == 0`.
    #[must_use]
    pub fn constant(c: T) -> Self {
        const { assert!(N >= 1, "a constant polynomial needs capacity >= 1") }
        let mut p = Self::zero();
        p.coeffs[0] = c;
        p
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// Creates the monomial `c·x^i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn monomial(c: T, i: usize) -> Self {
        assert!(i < N, "monomial x^{i} does not fit in capacity {N}");
        let mut p = Self::zero();
        p.coeffs[i] = c;
        p
    }

    /// The capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the degree, or `None` for the zero polynomial.
    ///
    /// `None` plays the role of degree −1 and orders below every `Some`.
    /// Coefficients are compared against zero exactly; float noise counts.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Returns the coefficient of `x^d` where `d` is the degree.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T> {
        self.degree().map(|d| &self.coeffs[d])
    }

    /// Returns the coefficient of `x^i`, zero beyond the capacity.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns a reference to the coefficient of `x^i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.coeffs.get(i)
    }

    /// Sets the coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::IndexOutOfRange` if `i >= N`.
    pub fn set(&mut self, i: usize, c: T) -> Result<(), PolyError> {
        let slot = self.coeffs.get_mut(i).ok_or(PolyError::IndexOutOfRange {
            index: i,
            capacity: N,
        })?;
        *slot = c;
        Ok(())
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T; N] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> [T; N] {
        self.coeffs
    }

    /// Evaluates the polynomial at `z` using Horner's method.
    ///
    /// The point may live in a wider domain than the coefficients, e.g.
    /// integer coefficients at a float or complex point.
    pub fn eval<U>(&self, z: &U) -> U
    where
        T: Embed<U>,
        U: Ring,
    {
        horner::evaluate(&self.coeffs, z)
    }

    /// Copies into a capacity `M >= N`. Never loses coefficients; a smaller
    /// `M` is rejected at compile time.
    #[must_use]
    pub fn widen<const M: usize>(&self) -> Poly<T, M> {
        const { assert!(M >= N, "widen cannot shrink; use truncate or try_resize") }
        Poly::from_coeffs(self.coeffs.iter().cloned())
    }

    /// Copies into capacity `M`, silently dropping coefficients of `x^M`
    /// and above.
    #[must_use]
    pub fn truncate<const M: usize>(&self) -> Poly<T, M> {
        Poly::from_coeffs(self.coeffs.iter().cloned())
    }

    /// Copies into capacity `M` if no non-zero coefficient is lost.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Truncated` if the degree is `M` or more.
    pub fn try_resize<const M: usize>(&self) -> Result<Poly<T, M>, PolyError> {
        match self.degree() {
            Some(d) if d >= M => Err(PolyError::Truncated {
                index: d,
                capacity: M,
            }),
            _ => Ok(self.truncate()),
        }
    }

    /// Embeds every coefficient into another domain.
    #[must_use]
    pub fn convert<U>(&self) -> Poly<U, N>
    where
        T: Embed<U>,
        U: Ring,
    {
        self.map(Embed::embed)
    }

    /// Applies `f` to every coefficient.
    pub fn map<U, F>(&self, mut f: F) -> Poly<U, N>
    where
        U: Ring,
        F: FnMut(&T) -> U,
    {
        Poly {
            coeffs: std::array::from_fn(|i| f(&self.coeffs[i])),
        }
    }

    /// Computes the formal derivative, in the same capacity.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let mut result = Self::zero();
        let mut factor = T::zero();
        for i in 1..N {
            factor = factor + T::one();
            result.coeffs[i - 1] = self.coeffs[i].clone() * factor.clone();
        }
        result
    }

    /// Replaces coefficient `i` by `f(old)` without requiring `T: Copy`.
    pub(crate) fn update<F>(&mut self, i: usize, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let old = mem::replace(&mut self.coeffs[i], T::zero());
        self.coeffs[i] = f(old);
    }
}

impl<T: Ring, const N: usize> Default for Poly<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Ring, const N: usize> From<[T; N]> for Poly<T, N> {
    fn from(coeffs: [T; N]) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Ring, const N: usize> From<T> for Poly<T, N> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Ring, const N: usize> FromIterator<T> for Poly<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

impl<T: Ring, const N: usize> Index<usize> for Poly<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coeffs[i]
    }
}

impl<T: Ring, const N: usize> IndexMut<usize> for Poly<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coeffs[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use statpoly_rings::{Q, Z};

    #[test]
    fn test_construction() {
        let p = Poly::<i64, 5>::from_coeffs([1, 2, 3]);
        assert_eq!(p.coeffs(), &[1, 2, 3, 0, 0]);

        // longer input is truncated
        let p = Poly::<i64, 2>::from_coeffs([1, 2, 3]);
        assert_eq!(p.coeffs(), &[1, 2]);

        let p: Poly<i64, 3> = (1..).collect();
        assert_eq!(p.coeffs(), &[1, 2, 3]);

        let p: Poly<i64, 3> = [4, 5, 6].into();
        assert_eq!(p.coeffs(), &[4, 5, 6]);

        let p = Poly::<f64, 3>::from(2.5);
        assert_eq!(p.coeffs(), &[2.5, 0.0, 0.0]);

        assert_eq!(Poly::<i64, 4>::default().coeffs(), &[0; 4]);
        assert_eq!(Poly::<i64, 3>::x().coeffs(), &[0, 1, 0]);
        assert_eq!(Poly::<i64, 3>::monomial(4, 2).coeffs(), &[0, 0, 4]);
    }

    #[test]
    fn test_degree() {
        assert_eq!(Poly::<i64, 4>::zero().degree(), None);
        assert_eq!(Poly::<i64, 0>::zero().degree(), None);
        assert_eq!(Poly::new([5i64, 0, 0]).degree(), Some(0));
        assert_eq!(Poly::new([0i64, 3, 0, 0]).degree(), Some(1));
        assert_eq!(Poly::new([1i64, 0, 1]).degree(), Some(2));

        // small float coefficients are still coefficients
        assert_eq!(Poly::new([1.0, 2.0, 1e-14]).degree(), Some(2));
        assert_eq!(Poly::new([0.0, 1e-12, -0.0]).degree(), Some(1));
        assert!(!Poly::new([0.0, 0.0, 1e-12]).is_zero());
    }

    #[test]
    fn test_accessors() {
        let mut p = Poly::new([1i64, 0, 3]);
        assert_eq!(p.capacity(), 3);
        assert_eq!(Poly::<i64, 3>::CAPACITY, 3);
        assert_eq!(p[2], 3);
        assert_eq!(p.coeff(7), 0);
        assert_eq!(p.get(7), None);
        assert_eq!(p.leading_coeff(), Some(&3));

        p[1] = 4;
        assert_eq!(p.coeff(1), 4);
        assert!(p.set(0, 9).is_ok());
        assert_eq!(
            p.set(3, 1),
            Err(PolyError::IndexOutOfRange {
                index: 3,
                capacity: 3
            })
        );
        assert_eq!(p.into_coeffs(), [9, 4, 3]);
    }

    #[test]
    fn test_resize() {
        let p = Poly::new([1i64, 2, 0, 0]);

        let wide: Poly<i64, 6> = p.widen();
        assert_eq!(wide.coeffs(), &[1, 2, 0, 0, 0, 0]);

        let tight: Poly<i64, 2> = p.try_resize().unwrap();
        assert_eq!(tight.coeffs(), &[1, 2]);

        let lossy: Poly<i64, 1> = p.truncate();
        assert_eq!(lossy.coeffs(), &[1]);

        assert_eq!(
            p.try_resize::<1>().unwrap_err(),
            PolyError::Truncated {
                index: 1,
                capacity: 1
            }
        );
    }

    #[test]
    fn test_convert() {
        let p = Poly::new([1i32, -2, 3]);
        let q: Poly<f64, 3> = p.convert();
        assert_eq!(q.coeffs(), &[1.0, -2.0, 3.0]);

        let doubled = p.map(|c| i64::from(*c) * 2);
        assert_eq!(doubled.coeffs(), &[2, -4, 6]);

        let wide = Poly::new([i64::MAX, -1]);
        let z: Poly<Z, 2> = wide.convert();
        assert_eq!(z.coeffs(), &[Z::new(i64::MAX), Z::new(-1)]);
    }

    #[test]
    fn test_derivative() {
        // d/dx (1 + 2x + 3x^2 + 4x^3) = 2 + 6x + 12x^2
        let p = Poly::new([1i64, 2, 3, 4]);
        assert_eq!(p.derivative().coeffs(), &[2, 6, 12, 0]);
        assert!(Poly::<i64, 1>::constant(5).derivative().is_zero());
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2
        let p = Poly::new([1i64, 2, 3]);
        assert_eq!(p.eval(&2i64), 17);

        let p = Poly::new([1i32, 2, 3]);
        assert_eq!(p.eval(&0.5f64), 2.75);
    }

    #[test]
    fn test_eval_integer_at_float_and_complex() {
        // 2 - 3x + x^2 = (x - 1)(x - 2)
        let p = Poly::new([2i64, -3, 1]);
        assert_eq!(p.eval(&1.5f64), -0.25);
        assert_eq!(p.eval(&2.0f64), 0.0);

        // at i: 2 - 3i - 1 = 1 - 3i
        let i = Complex::new(0.0, 1.0);
        assert_eq!(p.eval(&i), Complex::new(1.0, -3.0));

        let p = Poly::new([Z::new(-4), Z::new(0), Z::new(1)]);
        assert_eq!(p.eval(&0.5f64), -3.75);
        assert_eq!(p.eval(&Q::new(1, 2)), Q::new(-15, 4));
    }
}
