//! # groebner-poly
//!
//! Monomials, admissible monomial orders and ordered multivariate
//! polynomials.
//!
//! This crate provides:
//! - `Monomial`: a pure product of indexed variables
//! - The four classical monomial orders as zero-sized comparators
//! - `Term`: the single-term building block
//! - `Polynomial<F, O>`: an ordered term map over a coefficient
//!   field `F` under a monomial order `O`
//! - `PolynomialSet<F, O>`: a deterministic set of polynomials
//!
//! Polynomials never store a zero coefficient: every code path that
//! combines terms erases an entry the moment its coefficient
//! vanishes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod set;
pub mod term;

#[cfg(test)]
mod proptests;

pub use monomial::{Degree, IndivisibleMonomial, Monomial};
pub use ordering::{GradedLex, GradedRevLex, Lex, MonomialOrder, RevLex};
pub use polynomial::Polynomial;
pub use set::PolynomialSet;
pub use term::{IncompatibleTerms, Term};
