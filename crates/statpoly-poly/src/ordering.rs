//! Equality and ordering across capacities.
//!
//! Polynomials compare by value, so `x + 1` stored in capacity 2 equals
//! `x + 1` stored in capacity 5. Ordering is by degree first, then by
//! coefficients from the highest degree down. The zero polynomial sorts
//! below everything else.

use std::cmp::Ordering;

use statpoly_rings::traits::Ring;

use crate::poly::Poly;

impl<T: Ring, const N: usize, const M: usize> PartialEq<Poly<T, M>> for Poly<T, N> {
    fn eq(&self, other: &Poly<T, M>) -> bool {
        let degree = self.degree();
        degree == other.degree()
            && degree.map_or(true, |d| self.coeffs[..=d] == other.coeffs[..=d])
    }
}

impl<T: Ring + Eq, const N: usize> Eq for Poly<T, N> {}

impl<T, const N: usize, const M: usize> PartialOrd<Poly<T, M>> for Poly<T, N>
where
    T: Ring + PartialOrd,
{
    fn partial_cmp(&self, other: &Poly<T, M>) -> Option<Ordering> {
        let degree = self.degree();
        match degree.cmp(&other.degree()) {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }

        let Some(d) = degree else {
            return Some(Ordering::Equal);
        };

        for i in (0..=d).rev() {
            match self.coeffs[i].partial_cmp(&other.coeffs[i])? {
                Ordering::Equal => {}
                unequal => return Some(unequal),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Ring + Ord, const N: usize> Ord for Poly<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree().cmp(&other.degree()).then_with(|| {
            self.coeffs
                .iter()
                .rev()
                .cmp(other.coeffs.iter().rev())
        })
    }
}
