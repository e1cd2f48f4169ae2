//! Single polynomial terms.
//!
//! A term is one (monomial, coefficient) pair. The reduction step of
//! the Gröbner engine builds its quotient as a term before
//! multiplying it into a polynomial.

use thiserror::Error;

use groebner_rings::Field;

use crate::monomial::Monomial;

/// Error returned when combining two terms over different monomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("terms over different monomials cannot be combined")]
pub struct IncompatibleTerms;

/// A single (monomial, coefficient) pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term<F: Field> {
    monomial: Monomial,
    coefficient: F,
}

impl<F: Field> Term<F> {
    /// Creates a term.
    #[must_use]
    pub fn new(monomial: Monomial, coefficient: F) -> Self {
        Self {
            monomial,
            coefficient,
        }
    }

    /// Returns the monomial part.
    #[must_use]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &F {
        &self.coefficient
    }

    /// Splits the term into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Monomial, F) {
        (self.monomial, self.coefficient)
    }

    /// Adds two terms over the same monomial.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleTerms`] when the monomials differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, IncompatibleTerms> {
        if self.monomial != other.monomial {
            return Err(IncompatibleTerms);
        }

        Ok(Self {
            monomial: self.monomial.clone(),
            coefficient: self.coefficient.clone() + other.coefficient.clone(),
        })
    }

    /// Subtracts a term over the same monomial.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleTerms`] when the monomials differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, IncompatibleTerms> {
        if self.monomial != other.monomial {
            return Err(IncompatibleTerms);
        }

        Ok(Self {
            monomial: self.monomial.clone(),
            coefficient: self.coefficient.clone() - other.coefficient.clone(),
        })
    }

    /// Multiplies two terms: monomials multiply, coefficients multiply.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            monomial: &self.monomial * &other.monomial,
            coefficient: self.coefficient.clone() * other.coefficient.clone(),
        }
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            monomial: self.monomial.clone(),
            coefficient: -self.coefficient.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groebner_rings::Q;

    fn term(degrees: &[i64], n: i64) -> Term<Q> {
        Term::new(
            Monomial::new(degrees.iter().copied()),
            Q::from_integer(n),
        )
    }

    #[test]
    fn test_combining_same_monomial() {
        let sum = term(&[1, 2], 3).checked_add(&term(&[1, 2], 4)).unwrap();
        assert_eq!(sum, term(&[1, 2], 7));

        let difference = term(&[1, 2], 3).checked_sub(&term(&[1, 2], 3)).unwrap();
        assert_eq!(difference.coefficient(), &Q::from_integer(0));
    }

    #[test]
    fn test_combining_different_monomials_fails() {
        assert_eq!(
            term(&[1], 1).checked_add(&term(&[2], 1)),
            Err(IncompatibleTerms)
        );
        assert_eq!(
            term(&[1], 1).checked_sub(&term(&[], 1)),
            Err(IncompatibleTerms)
        );
    }

    #[test]
    fn test_mul() {
        let product = term(&[1, 2], 3).mul(&term(&[0, 1], -2));
        assert_eq!(product, term(&[1, 3], -6));
    }
}
