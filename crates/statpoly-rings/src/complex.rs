//! Complex numbers (`num_complex::Complex`) as coefficients.
//!
//! Zero and one are tested component-wise, exactly for arithmetic and under
//! a `Tolerance` for printing. A complex
//! value prints as negative when its real part is negative, or when the real
//! part vanishes and the imaginary part is negative.

use std::fmt::{self, Display};

use num_complex::Complex;

use crate::division::FieldDivision;
use crate::tolerance::Tolerance;
use crate::traits::{Classify, Coefficient, Ring, Sign};

/// Writes `v` the way a unit coefficient is written: `1` vanishes and `-1`
/// becomes a bare minus.
fn fmt_unit_elided<F>(v: F, f: &mut fmt::Formatter<'_>, tol: &Tolerance) -> fmt::Result
where
    F: Classify + Copy,
{
    if (-v).is_one_within(tol) {
        f.write_str("-")
    } else if v.is_one_within(tol) {
        Ok(())
    } else {
        Display::fmt(&v, f)
    }
}

macro_rules! impl_complex {
    ($($t:ty),*) => {$(
        impl Ring for Complex<$t> {
            fn zero() -> Self {
                Complex::new(0.0, 0.0)
            }

            fn one() -> Self {
                Complex::new(1.0, 0.0)
            }

            fn is_zero(&self) -> bool {
                Ring::is_zero(&self.re) && Ring::is_zero(&self.im)
            }

            fn is_one(&self) -> bool {
                Ring::is_one(&self.re) && Ring::is_zero(&self.im)
            }
        }

        impl Coefficient for Complex<$t> {
            type Division = FieldDivision;
        }

        impl Classify for Complex<$t> {
            fn is_zero_within(&self, tol: &Tolerance) -> bool {
                self.re.is_zero_within(tol) && self.im.is_zero_within(tol)
            }

            fn is_one_within(&self, tol: &Tolerance) -> bool {
                self.re.is_one_within(tol) && self.im.is_zero_within(tol)
            }

            fn sign_within(&self, tol: &Tolerance) -> Sign {
                match self.re.sign_within(tol) {
                    Sign::Zero => self.im.sign_within(tol),
                    sign => sign,
                }
            }

            fn fmt_coeff(&self, f: &mut fmt::Formatter<'_>, tol: &Tolerance) -> fmt::Result {
                let re_zero = self.re.is_zero_within(tol);
                let im_zero = self.im.is_zero_within(tol);

                match (re_zero, im_zero) {
                    (true, true) => f.write_str("0"),
                    (true, false) => {
                        fmt_unit_elided(self.im, f, tol)?;
                        f.write_str("i")
                    }
                    (false, true) => Display::fmt(&self.re, f),
                    (false, false) => {
                        f.write_str("(")?;
                        Display::fmt(&self.re, f)?;
                        if self.im < 0.0 {
                            f.write_str(" - ")?;
                            fmt_unit_elided(-self.im, f, tol)?;
                        } else {
                            f.write_str(" + ")?;
                            fmt_unit_elided(self.im, f, tol)?;
                        }
                        f.write_str("i)")
                    }
                }
            }
        }
    )*};
}

impl_complex!(f32, f64);
