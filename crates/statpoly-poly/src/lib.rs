//! # statpoly-poly
//!
//! Dense univariate polynomials with a capacity fixed in the type.
//!
//! `Poly<T, N>` stores exactly `N` coefficients on the stack. Every
//! operation's result capacity follows from its operand capacities (see
//! [`capacity`]), and operations that change capacity take it as a const
//! parameter checked at compile time:
//!
//! ```
//! use statpoly_poly::Poly;
//!
//! let a = Poly::new([1i64, 0, 1]); // x^2 + 1
//! let b = Poly::new([-1i64, 1]);   // x - 1
//! let p: Poly<i64, 4> = a.mul_poly(&b);
//! assert_eq!(p.to_string(), "x^3 - x^2 + x - 1");
//! ```
//!
//! Division dispatches on the coefficient domain: fields use Knuth's
//! Algorithm D, integer-like domains use pseudo-division (Algorithm R).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod capacity;
pub mod display;
pub mod division;
pub mod error;
pub mod horner;
pub mod ordering;
pub mod poly;
pub mod power;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use display::PolyDisplay;
pub use error::PolyError;
pub use poly::Poly;
