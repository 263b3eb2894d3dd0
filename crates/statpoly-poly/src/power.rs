//! Exponentiation by squaring with a compile-time exponent.

use log::trace;
use statpoly_rings::traits::Ring;

use crate::capacity;
use crate::poly::Poly;

impl<T: Ring, const N: usize> Poly<T, N> {
    /// Raises to the power `E`.
    ///
    /// The result capacity `P` must be `max(N·E, 1)`. Every partial product
    /// has degree at most `E·(N - 1) < P`, so all multiplications run in
    /// capacity `P` without truncation.
    ///
    /// ```
    /// use statpoly_poly::Poly;
    ///
    /// let p = Poly::new([1i64, 1]);
    /// let cube: Poly<i64, 6> = p.pow::<3, 6>();
    /// assert_eq!(cube.coeffs(), &[1, 3, 3, 1, 0, 0]);
    /// ```
    #[must_use]
    pub fn pow<const E: usize, const P: usize>(&self) -> Poly<T, P> {
        const { assert!(P == capacity::power(N, E), "power capacity must be max(N * E, 1)") }
        trace!("raising degree {:?} to the power {E}", self.degree());

        let mut result = Poly::one();
        let mut base: Poly<T, P> = self.truncate();
        let mut e = E;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_in_capacity(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul_in_capacity(&base);
            }
        }

        result
    }
}
