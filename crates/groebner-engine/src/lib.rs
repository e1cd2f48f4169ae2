//! # groebner-engine
//!
//! The Gröbner basis engine: S-polynomials, elementary and chained
//! reductions, Buchberger completion and basis normalization, plus
//! the classical cyclic-n seed ideals.
//!
//! Everything is a free function over the polynomial layer; the only
//! state is the polynomial set being completed. The completion loop
//! is sequential; the pair scan optionally fans out over rayon
//! because checking one pair against a frozen set is referentially
//! transparent.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buchberger;
pub mod cyclic;
pub mod reduce;
pub mod spoly;

pub use buchberger::{
    buchberger, buchberger_with, check_pair, find_pairs, find_pairs_parallel, groebner_basis,
    inter_reduce, normalize, BuchbergerConfig,
};
pub use cyclic::{cyclic_ideal, elementary_symmetric};
pub use reduce::{normal_form, normal_form_in_place, reduce_by, reduce_once, reduce_over_set};
pub use spoly::{leading_terms_coprime, s_polynomial};
