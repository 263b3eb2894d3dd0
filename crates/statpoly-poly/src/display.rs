//! Human readable polynomial output.
//!
//! Terms are written from the highest degree down: `x^3 - x^2 + x - 1`.
//! Zero terms are skipped, unit coefficients are elided on non-constant
//! terms, and negative coefficients are folded into the joining ` - `.
//! Which coefficients count as zero, one and negative is decided by the
//! coefficient's `Classify` implementation under a configurable tolerance.

use std::fmt;

use statpoly_rings::tolerance::Tolerance;
use statpoly_rings::traits::{Classify, Ring};

use crate::poly::Poly;

/// A configurable formatter for a polynomial, created by [`Poly::display`].
///
/// ```
/// use statpoly_poly::Poly;
///
/// let p = Poly::new([-1i64, 0, 2]);
/// assert_eq!(p.display().var("z").to_string(), "2z^2 - 1");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a, T: Ring, const N: usize> {
    poly: &'a Poly<T, N>,
    tolerance: Tolerance,
    var: &'a str,
}

impl<T: Classify, const N: usize> Poly<T, N> {
    /// Returns a formatter using the default tolerance and variable `x`.
    #[must_use]
    pub fn display(&self) -> PolyDisplay<'_, T, N> {
        PolyDisplay {
            poly: self,
            tolerance: Tolerance::DEFAULT,
            var: "x",
        }
    }
}

impl<'a, T: Classify, const N: usize> PolyDisplay<'a, T, N> {
    /// Sets the tolerance under which coefficients count as zero or one.
    #[must_use]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the variable symbol.
    #[must_use]
    pub fn var(mut self, var: &'a str) -> Self {
        self.var = var;
        self
    }

    fn write_power(&self, f: &mut fmt::Formatter<'_>, i: usize) -> fmt::Result {
        match i {
            0 => Ok(()),
            1 => f.write_str(self.var),
            _ => write!(f, "{}^{i}", self.var),
        }
    }

    // Unit coefficients of non-constant terms are dropped; -1 leaves a bare
    // minus. The -1 test never negates, so `i64::MIN` can lead.
    fn write_unit_elided(&self, f: &mut fmt::Formatter<'_>, c: &T) -> fmt::Result {
        let tol = &self.tolerance;
        if c.is_one_within(tol) {
            Ok(())
        } else if c.sign_within(tol).is_negative() && (c.clone() + T::one()).is_zero_within(tol) {
            f.write_str("-")
        } else {
            c.fmt_coeff(f, tol)
        }
    }
}

/// # Panics
///
/// A negative coefficient below the leading term is written as its
/// negation after ` - `. For machine integers that negation overflows on
/// `MIN`, which panics in debug builds.
impl<T: Classify, const N: usize> fmt::Display for PolyDisplay<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tol = &self.tolerance;
        let coeffs = self.poly.coeffs();

        let Some(degree) = coeffs.iter().rposition(|c| !c.is_zero_within(tol)) else {
            return f.write_str("0");
        };

        if degree == 0 {
            return coeffs[0].fmt_coeff(f, tol);
        }

        self.write_unit_elided(f, &coeffs[degree])?;
        self.write_power(f, degree)?;

        for i in (0..degree).rev() {
            let c = &coeffs[i];
            if c.is_zero_within(tol) {
                continue;
            }

            let (joiner, magnitude) = if c.sign_within(tol).is_negative() {
                (" - ", -c.clone())
            } else {
                (" + ", c.clone())
            };
            f.write_str(joiner)?;

            if i == 0 {
                magnitude.fmt_coeff(f, tol)?;
            } else {
                self.write_unit_elided(f, &magnitude)?;
                self.write_power(f, i)?;
            }
        }

        Ok(())
    }
}

/// Formats with the default tolerance and variable `x`.
///
/// # Panics
///
/// See [`PolyDisplay`]: a machine integer `MIN` below the leading term
/// overflows when negated.
impl<T: Classify, const N: usize> fmt::Display for Poly<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(), f)
    }
}
