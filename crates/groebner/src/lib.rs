//! # Groebner
//!
//! Exact computation with multivariate polynomials over computable
//! fields, built around a complete Buchberger completion.
//!
//! The stack is strictly layered:
//!
//! - **Checked integers**: fixed-width machine integers with exact
//!   overflow predicates
//! - **Rationals**: reduced fractions of checked integers, the
//!   reference coefficient field
//! - **Monomials and orders**: exponent vectors under one of the
//!   four classical admissible orders
//! - **Polynomials**: ordered term maps with the erase-on-zero
//!   invariant
//! - **The engine**: S-polynomials, normal forms and Buchberger
//!   completion into the unique reduced monic basis
//!
//! ## Quick start
//!
//! ```
//! use groebner::prelude::*;
//!
//! // x^2 - y and x y - 1 over Q, lexicographic order
//! let seed: PolynomialSet<Q, Lex> = [
//!     Polynomial::from_terms([
//!         (Monomial::new([2]), Q::from_integer(1)),
//!         (Monomial::new([0, 1]), Q::from_integer(-1)),
//!     ]),
//!     Polynomial::from_terms([
//!         (Monomial::new([1, 1]), Q::from_integer(1)),
//!         (Monomial::new([0, 0]), Q::from_integer(-1)),
//!     ]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let basis = groebner_basis(seed);
//! assert!(!basis.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use groebner_arith as arith;
pub use groebner_engine as engine;
pub use groebner_poly as poly;
pub use groebner_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use groebner_arith::{ArithmeticError, CheckedInt, Rational};
    pub use groebner_engine::{
        buchberger, groebner_basis, normal_form, s_polynomial, BuchbergerConfig,
    };
    pub use groebner_poly::{
        GradedLex, GradedRevLex, IncompatibleTerms, IndivisibleMonomial, Lex, Monomial,
        MonomialOrder, Polynomial, PolynomialSet, RevLex, Term,
    };
    pub use groebner_rings::{Field, FiniteField, OrderedRing, Ring, Q};
}
