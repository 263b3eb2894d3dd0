//! Horner's rule.

use statpoly_rings::embed::Embed;
use statpoly_rings::traits::Ring;

/// Evaluates `coeffs[0] + coeffs[1]·z + … + coeffs[n-1]·z^(n-1)`.
///
/// Coefficients are embedded into the point's domain `U` before use, so an
/// integer polynomial can be evaluated at a float or complex point. An empty
/// coefficient slice evaluates to zero.
pub fn evaluate<T, U>(coeffs: &[T], z: &U) -> U
where
    T: Embed<U>,
    U: Ring,
{
    let Some((last, rest)) = coeffs.split_last() else {
        return U::zero();
    };

    rest.iter()
        .rev()
        .fold(last.embed(), |acc, c| acc * z.clone() + c.embed())
}
