//! # statpoly
//!
//! Univariate polynomial algebra with capacities fixed at compile time.
//!
//! A `Poly<T, N>` holds exactly `N` coefficients on the stack. Addition
//! widens to the larger capacity, multiplication to `N + M - 1`, division
//! to `N - M + 1` for the quotient and `min(N, M)` for the remainder; a wrong
//! result capacity is rejected when the code is compiled.
//!
//! ## Features
//!
//! - **Any coefficient ring**: machine integers and floats, arbitrary
//!   precision `Z` and `Q`, complex numbers, quaternions
//! - **Dual division**: Knuth's Algorithm D over fields, pseudo-division
//!   over integer-like domains, picked by the coefficient type
//! - **Tolerant printing**: float noise below a configurable `Tolerance`
//!   never shows up in output
//!
//! ## Quick Start
//!
//! ```rust
//! use statpoly::prelude::*;
//!
//! // ϕ5 = (x^5 - 1) / (x - 1)
//! let x5_minus_1 = Poly::<i64, 6>::monomial(1, 5) - 1;
//! let x_minus_1 = Poly::new([-1i64, 1]);
//! let phi5: Poly<i64, 5> = x5_minus_1.quotient(&x_minus_1);
//! assert_eq!(phi5.to_string(), "x^4 + x^3 + x^2 + x + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use statpoly_poly as poly;
pub use statpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use statpoly_poly::{Poly, PolyDisplay, PolyError};
    pub use statpoly_rings::{Classify, Coefficient, Embed, Quaternion, Ring, Sign, Tolerance, Q, Z};
}
