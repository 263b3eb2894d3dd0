//! # statpoly-rings
//!
//! Coefficient domains for statically sized polynomials.
//!
//! This crate provides:
//! - Capability traits: `Ring`, `Coefficient`, `Classify`
//! - Division strategies: Knuth's Algorithm D (fields) and R (pseudo-division)
//! - Float tolerance configuration for printing
//! - `Embed`, the coefficient coercion used by evaluation
//! - Concrete domains: machine integers and floats, Z, Q, complex, quaternions
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Coefficient   (division, strategy picked by `Coefficient::Division`)
//!  └── Classify      (sign classification for printing)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod division;
pub mod embed;
pub mod integers;
pub mod primitives;
pub mod quaternion;
pub mod rationals;
pub mod tolerance;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use division::{integer_power, DivisionStrategy, FieldDivision, PseudoDivision};
pub use embed::Embed;
pub use integers::Z;
pub use quaternion::Quaternion;
pub use rationals::Q;
pub use tolerance::{Tolerance, ToleranceError};
pub use traits::{hypercomplex_sign, Classify, Coefficient, Ring, Sign};
