//! Polynomial long division.
//!
//! The outer loop runs here; each elimination step is delegated to the
//! coefficient domain's `DivisionStrategy`. Over a field this computes
//! `a = q·b + r`. Over an integer-like domain it computes the pseudo-division
//! `lc(b)^(m-n+1)·a = q·b + r` so every coefficient stays in the ring.
//!
//! Result capacities depend only on operand capacities: the quotient gets
//! `max(N - M + 1, 1)` and the remainder `min(N, M)`.

use std::ops::Rem;

use log::{debug, trace};
use statpoly_rings::division::DivisionStrategy;
use statpoly_rings::traits::Coefficient;

use crate::capacity;
use crate::error::PolyError;
use crate::poly::Poly;

impl<T: Coefficient, const N: usize> Poly<T, N> {
    /// Divides by `divisor`, returning quotient and remainder.
    ///
    /// `QN` must be `max(N - M + 1, 1)` and `RN` must be `min(N, M)`.
    ///
    /// # Errors
    ///
    /// - `PolyError::ZeroDivisor` if the divisor is the zero polynomial.
    /// - `PolyError::QuotientOverflow` if the divisor's degree is so far
    ///   below its capacity that the quotient does not fit in `QN`.
    pub fn checked_div_rem<const M: usize, const QN: usize, const RN: usize>(
        &self,
        divisor: &Poly<T, M>,
    ) -> Result<(Poly<T, QN>, Poly<T, RN>), PolyError> {
        const {
            assert!(QN == capacity::quotient(N, M), "quotient capacity must be max(N - M + 1, 1)");
            assert!(RN == capacity::remainder(N, M), "remainder capacity must be min(N, M)");
        }

        let mut quotient = Poly::zero();
        let remainder = self.long_division(divisor, &mut quotient.coeffs)?;
        Ok((quotient, remainder.truncate()))
    }

    /// Divides by `divisor`, returning quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics if the divisor is zero, or if the quotient does not fit in
    /// `QN` (see [`Poly::checked_div_rem`]).
    #[must_use]
    pub fn div_rem<const M: usize, const QN: usize, const RN: usize>(
        &self,
        divisor: &Poly<T, M>,
    ) -> (Poly<T, QN>, Poly<T, RN>) {
        self.checked_div_rem(divisor)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// The quotient of division by `divisor`. `QN` must be
    /// `max(N - M + 1, 1)`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Poly::div_rem`].
    #[must_use]
    pub fn quotient<const M: usize, const QN: usize>(&self, divisor: &Poly<T, M>) -> Poly<T, QN> {
        const {
            assert!(QN == capacity::quotient(N, M), "quotient capacity must be max(N - M + 1, 1)");
        }

        let mut quotient = Poly::zero();
        if let Err(e) = self.long_division(divisor, &mut quotient.coeffs) {
            panic!("{e}");
        }
        quotient
    }

    /// The remainder of division by `divisor`. `RN` must be `min(N, M)`.
    ///
    /// # Panics
    ///
    /// Panics if the divisor is zero.
    #[must_use]
    pub fn remainder<const M: usize, const RN: usize>(&self, divisor: &Poly<T, M>) -> Poly<T, RN> {
        const { assert!(RN == capacity::remainder(N, M), "remainder capacity must be min(N, M)") }

        // the full quotient always fits in N coefficients
        let mut scratch = Self::zero();
        match self.long_division(divisor, &mut scratch.coeffs) {
            Ok(r) => r.truncate(),
            Err(e) => panic!("{e}"),
        }
    }

    /// Runs the elimination loop, writing the quotient into `q` and
    /// returning the remainder at capacity `N`.
    fn long_division<const M: usize>(
        &self,
        divisor: &Poly<T, M>,
        q: &mut [T],
    ) -> Result<Self, PolyError> {
        let n = divisor.degree().ok_or(PolyError::ZeroDivisor)?;

        let Some(m) = self.degree().filter(|&m| m >= n) else {
            debug!(
                "dividend degree {:?} is below divisor degree {n}, quotient is zero",
                self.degree()
            );
            return Ok(self.clone());
        };

        if m - n >= q.len() {
            return Err(PolyError::QuotientOverflow {
                degree: m - n,
                capacity: q.len(),
            });
        }

        trace!(
            "dividing degree {m} by degree {n} with {}",
            <T::Division as DivisionStrategy>::NAME
        );

        let mut u = self.coeffs.clone();
        for k in (0..=m - n).rev() {
            T::Division::eliminate(q, &mut u, &divisor.coeffs, n, k);
        }

        Ok(Poly::from_coeffs(u.into_iter().take(n)))
    }
}

/// Same-capacity remainder, `a % b`.
impl<T: Coefficient, const N: usize> Rem for Poly<T, N> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.remainder(&rhs)
    }
}
