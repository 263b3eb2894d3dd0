//! Polynomial division strategies.
//!
//! Knuth, The Art of Computer Programming, Volume 2, §4.6.1 gives two main
//! loops for polynomial division: Algorithm D for coefficients in a field,
//! and Algorithm R (pseudo-division) for coefficients in an integral domain.
//! They compute different things: D yields `u = q·v + r`, while R yields
//! `lc(v)^(m-n+1)·u = q·v + r` with every intermediate kept in the ring.
//!
//! A coefficient domain picks one through `Coefficient::Division`. The outer
//! loop over `k` lives with the polynomial type; each strategy supplies one
//! elimination step.

use std::ops::Div;

use crate::traits::Ring;

/// One elimination step of polynomial long division.
pub trait DivisionStrategy {
    /// True for pseudo-division over integer-like domains.
    const INTEGER_LIKE: bool;

    /// Human readable name, used in diagnostics.
    const NAME: &'static str;

    /// Computes quotient coefficient `q[k]` and updates the working
    /// dividend `u` in place.
    ///
    /// `v` is the divisor and `n` its degree, so `v[n]` is non-zero. Steps
    /// must be run for `k` from `deg(u) - n` down to 0.
    fn eliminate<T>(q: &mut [T], u: &mut [T], v: &[T], n: usize, k: usize)
    where
        T: Ring + Div<Output = T>;
}

/// Algorithm D: division over a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldDivision;

/// Algorithm R: pseudo-division over an integral domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PseudoDivision;

impl DivisionStrategy for FieldDivision {
    const INTEGER_LIKE: bool = false;
    const NAME: &'static str = "field division";

    fn eliminate<T>(q: &mut [T], u: &mut [T], v: &[T], n: usize, k: usize)
    where
        T: Ring + Div<Output = T>,
    {
        q[k] = u[n + k].clone() / v[n].clone();
        for j in (k..n + k).rev() {
            u[j] = u[j].clone() - q[k].clone() * v[j - k].clone();
        }
    }
}

impl DivisionStrategy for PseudoDivision {
    const INTEGER_LIKE: bool = true;
    const NAME: &'static str = "pseudo-division";

    fn eliminate<T>(q: &mut [T], u: &mut [T], v: &[T], n: usize, k: usize)
    where
        T: Ring + Div<Output = T>,
    {
        let lead = u[n + k].clone();
        q[k] = lead.clone() * integer_power(&v[n], k);
        for j in (0..n + k).rev() {
            let scaled = v[n].clone() * u[j].clone();
            u[j] = if j < k {
                scaled
            } else {
                scaled - lead.clone() * v[j - k].clone()
            };
        }
    }
}

/// Computes `t^n` by repeated squaring, with the small exponents that
/// dominate pseudo-division unrolled.
pub fn integer_power<T: Ring>(t: &T, n: usize) -> T {
    match n {
        0 => T::one(),
        1 => t.clone(),
        2 => t.clone() * t.clone(),
        3 => t.clone() * t.clone() * t.clone(),
        _ => {
            let half = integer_power(t, n / 2);
            let result = half.clone() * half;
            if n & 1 == 1 {
                result * t.clone()
            } else {
                result
            }
        }
    }
}
