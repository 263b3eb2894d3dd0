//! Embedding coefficients into a wider domain.
//!
//! Evaluation and conversion coerce every coefficient into the domain of
//! the evaluation point. `From` only covers lossless conversions, so an
//! `i64` could not reach an `f64` or a complex point through it. `Embed`
//! covers the numerically natural maps between the domains in this crate,
//! rounding where the target cannot represent the value exactly.

use num_complex::Complex;

use crate::integers::Z;
use crate::quaternion::Quaternion;
use crate::rationals::Q;
use crate::traits::Ring;

/// The canonical map from `Self` into the ring `U`.
pub trait Embed<U> {
    /// Maps `self` into `U`.
    fn embed(&self) -> U;
}

impl<T: Ring> Embed<T> for T {
    fn embed(&self) -> T {
        self.clone()
    }
}

macro_rules! impl_embed_lossless {
    ($from:ty => $($to:ty),*) => {$(
        impl Embed<$to> for $from {
            fn embed(&self) -> $to {
                <$to>::from(*self)
            }
        }
    )*};
}

impl_embed_lossless!(i8 => i16, i32, i64, i128, isize);
impl_embed_lossless!(i16 => i32, i64, i128, isize);
impl_embed_lossless!(i32 => i64, i128);
impl_embed_lossless!(i64 => i128);
impl_embed_lossless!(f32 => f64);

macro_rules! impl_embed_float {
    ($($from:ty),*) => {$(
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        impl Embed<f32> for $from {
            fn embed(&self) -> f32 {
                *self as f32
            }
        }

        #[allow(clippy::cast_precision_loss)]
        impl Embed<f64> for $from {
            fn embed(&self) -> f64 {
                *self as f64
            }
        }
    )*};
}

impl_embed_float!(i8, i16, i32, i64, i128, isize);

impl Embed<f64> for Z {
    fn embed(&self) -> f64 {
        self.0.to_f64().value()
    }
}

impl Embed<f64> for Q {
    fn embed(&self) -> f64 {
        self.0.to_f64().value()
    }
}

macro_rules! impl_embed_integer {
    ($($from:ty),*) => {$(
        impl Embed<Z> for $from {
            fn embed(&self) -> Z {
                Z(dashu::integer::IBig::from(*self))
            }
        }

        impl Embed<Q> for $from {
            fn embed(&self) -> Q {
                Q::from(Embed::<Z>::embed(self))
            }
        }
    )*};
}

impl_embed_integer!(i8, i16, i32, i64, i128, isize);

impl Embed<Q> for Z {
    fn embed(&self) -> Q {
        Q::from(self.clone())
    }
}

// Real domains sit on the real axis of the complex plane and of the
// quaternions.
macro_rules! impl_embed_real_axis {
    ($($from:ty),*) => {$(
        impl Embed<Complex<f64>> for $from {
            fn embed(&self) -> Complex<f64> {
                Complex::new(Embed::<f64>::embed(self), 0.0)
            }
        }

        impl Embed<Quaternion<f64>> for $from {
            fn embed(&self) -> Quaternion<f64> {
                Quaternion::real(Embed::<f64>::embed(self))
            }
        }
    )*};
}

impl_embed_real_axis!(i8, i16, i32, i64, i128, isize, f32, f64, Z, Q);

macro_rules! impl_embed_real_axis_f32 {
    ($($from:ty),*) => {$(
        impl Embed<Complex<f32>> for $from {
            fn embed(&self) -> Complex<f32> {
                Complex::new(Embed::<f32>::embed(self), 0.0)
            }
        }

        impl Embed<Quaternion<f32>> for $from {
            fn embed(&self) -> Quaternion<f32> {
                Quaternion::real(Embed::<f32>::embed(self))
            }
        }
    )*};
}

impl_embed_real_axis_f32!(i8, i16, i32, i64, i128, isize, f32);

impl Embed<Complex<f64>> for Complex<f32> {
    fn embed(&self) -> Complex<f64> {
        Complex::new(f64::from(self.re), f64::from(self.im))
    }
}

impl Embed<Quaternion<f64>> for Complex<f64> {
    fn embed(&self) -> Quaternion<f64> {
        Quaternion::new(self.re, self.im, 0.0, 0.0)
    }
}
