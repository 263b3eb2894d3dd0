//! Machine integers and floats as coefficient domains.
//!
//! Signed integers are integer-like and divide polynomials by
//! pseudo-division. Floats are treated as a field. Their `Ring` identity
//! tests are exact, so arithmetic never discards a small coefficient; only
//! the `Classify` tests used by the printer go through a `Tolerance`.

use crate::division::{FieldDivision, PseudoDivision};
use crate::tolerance::Tolerance;
use crate::traits::{Classify, Coefficient, Ring, Sign};

macro_rules! impl_signed_integer {
    ($($t:ty),*) => {$(
        impl Ring for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn is_one(&self) -> bool {
                *self == 1
            }
        }

        impl Coefficient for $t {
            type Division = PseudoDivision;
        }

        impl Classify for $t {
            fn sign_within(&self, _tol: &Tolerance) -> Sign {
                Sign::from_ordering(self.cmp(&0))
            }
        }
    )*};
}

impl_signed_integer!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Ring for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            #[allow(clippy::float_cmp)]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            #[allow(clippy::float_cmp)]
            fn is_one(&self) -> bool {
                *self == 1.0
            }
        }

        impl Coefficient for $t {
            type Division = FieldDivision;
        }

        impl Classify for $t {
            fn is_zero_within(&self, tol: &Tolerance) -> bool {
                tol.is_zero(f64::from(*self))
            }

            fn is_one_within(&self, tol: &Tolerance) -> bool {
                tol.is_one(f64::from(*self))
            }

            fn sign_within(&self, tol: &Tolerance) -> Sign {
                if tol.is_zero(f64::from(*self)) {
                    Sign::Zero
                } else if *self < 0.0 {
                    Sign::Negative
                } else {
                    Sign::Positive
                }
            }
        }
    )*};
}

impl_float!(f32, f64);
