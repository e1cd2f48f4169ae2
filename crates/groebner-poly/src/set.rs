//! Sets of polynomials.
//!
//! The completion algorithm works on a set: no duplicates, no zero
//! polynomial, deterministic iteration in the induced order on
//! polynomials.

use std::collections::BTreeSet;

use groebner_rings::Field;

use crate::ordering::MonomialOrder;
use crate::polynomial::Polynomial;

/// A set of non-zero polynomials under a common order.
///
/// Inserting the zero polynomial is a no-op: ideals do not gain
/// anything from it and the engine's invariants assume every member
/// has a leading term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialSet<F: Field, O: MonomialOrder> {
    polynomials: BTreeSet<Polynomial<F, O>>,
}

impl<F: Field + Ord, O: MonomialOrder> PolynomialSet<F, O> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            polynomials: BTreeSet::new(),
        }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Inserts a polynomial. Zero is silently rejected.
    ///
    /// Returns true if the set did not already contain it.
    pub fn insert(&mut self, polynomial: Polynomial<F, O>) -> bool {
        if polynomial.is_zero() {
            return false;
        }

        self.polynomials.insert(polynomial)
    }

    /// Removes a polynomial; returns true if it was a member.
    pub fn remove(&mut self, polynomial: &Polynomial<F, O>) -> bool {
        self.polynomials.remove(polynomial)
    }

    /// Extracts the smallest member in the induced order.
    pub fn pop_first(&mut self) -> Option<Polynomial<F, O>> {
        self.polynomials.pop_first()
    }

    /// Returns true if the polynomial is a member.
    #[must_use]
    pub fn contains(&self, polynomial: &Polynomial<F, O>) -> bool {
        self.polynomials.contains(polynomial)
    }

    /// Moves every member of `other` into this set.
    pub fn merge(&mut self, mut other: Self) {
        self.polynomials.append(&mut other.polynomials);
    }

    /// Iterates members in the induced order.
    pub fn iter(&self) -> impl Iterator<Item = &Polynomial<F, O>> {
        self.polynomials.iter()
    }
}

impl<F: Field + Ord, O: MonomialOrder> Default for PolynomialSet<F, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field + Ord, O: MonomialOrder> FromIterator<Polynomial<F, O>> for PolynomialSet<F, O> {
    fn from_iter<I: IntoIterator<Item = Polynomial<F, O>>>(iter: I) -> Self {
        let mut set = Self::new();
        for polynomial in iter {
            set.insert(polynomial);
        }

        set
    }
}

impl<'a, F: Field + Ord, O: MonomialOrder> IntoIterator for &'a PolynomialSet<F, O> {
    type Item = &'a Polynomial<F, O>;
    type IntoIter = std::collections::btree_set::Iter<'a, Polynomial<F, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polynomials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Monomial;
    use crate::ordering::Lex;
    use groebner_rings::Q;

    fn poly(terms: &[(&[i64], i64)]) -> Polynomial<Q, Lex> {
        Polynomial::from_terms(terms.iter().map(|(degrees, n)| {
            (
                Monomial::new(degrees.iter().copied()),
                Q::from_integer(*n),
            )
        }))
    }

    #[test]
    fn test_zero_is_rejected() {
        let mut set: PolynomialSet<Q, Lex> = PolynomialSet::new();
        assert!(!set.insert(Polynomial::zero()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut set: PolynomialSet<Q, Lex> = PolynomialSet::new();
        assert!(set.insert(poly(&[(&[1], 1)])));
        assert!(!set.insert(poly(&[(&[1], 1)])));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut lhs: PolynomialSet<Q, Lex> =
            [poly(&[(&[1], 1)]), poly(&[(&[2], 1)])].into_iter().collect();
        let rhs = [poly(&[(&[2], 1)]), poly(&[(&[3], 1)])].into_iter().collect();

        lhs.merge(rhs);
        assert_eq!(lhs.len(), 3);
    }

    #[test]
    fn test_pop_first_is_deterministic() {
        let mut set: PolynomialSet<Q, Lex> =
            [poly(&[(&[2], 1)]), poly(&[(&[1], 1)])].into_iter().collect();

        let first = set.pop_first().unwrap();
        assert_eq!(first, poly(&[(&[1], 1)]));
        assert_eq!(set.len(), 1);
    }
}
