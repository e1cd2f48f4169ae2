//! Ordered multivariate polynomials.
//!
//! A polynomial maps monomials to non-zero coefficients, keyed under
//! a monomial order. Iteration, printing and the n-th term all run
//! from the largest monomial down — the leading term comes first.
//!
//! Every mutation funnels through [`Polynomial::add_term`], the one
//! merge primitive, which erases an entry the moment its coefficient
//! becomes zero. Nothing else touches the map.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use groebner_rings::{Field, OrderedRing, Ring};

use crate::monomial::Monomial;
use crate::ordering::{Lex, MonomialOrder, OrderedMonomial};
use crate::term::Term;

/// An ordered collection of (monomial, non-zero coefficient) terms.
///
/// `F` is the coefficient field, `O` the monomial order. The order
/// rides the type: converting between orders rebuilds the map via
/// [`Polynomial::reorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: Field, O: MonomialOrder = Lex> {
    terms: BTreeMap<OrderedMonomial<O>, F>,
}

impl<F: Field, O: MonomialOrder> Polynomial<F, O> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(coefficient: F) -> Self {
        let mut polynomial = Self::zero();
        polynomial.add_term(Monomial::one(), coefficient);

        polynomial
    }

    /// Creates a polynomial from (monomial, coefficient) pairs.
    ///
    /// Duplicate monomials are merged and zero coefficients
    /// eliminated.
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = (Monomial, F)>) -> Self {
        let mut polynomial = Self::zero();
        for (monomial, coefficient) in terms {
            polynomial.add_term(monomial, coefficient);
        }

        polynomial
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns the n-th term counting from the largest.
    #[must_use]
    pub fn nth_term(&self, index: usize) -> Option<(&Monomial, &F)> {
        self.iter().nth(index)
    }

    /// Returns the largest term under the order.
    #[must_use]
    pub fn leading_term(&self) -> Option<(&Monomial, &F)> {
        self.terms
            .last_key_value()
            .map(|(monomial, coefficient)| (monomial.get(), coefficient))
    }

    /// Returns the monomial of the leading term.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.leading_term().map(|(monomial, _)| monomial)
    }

    /// Returns the coefficient of the leading term.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<&F> {
        self.leading_term().map(|(_, coefficient)| coefficient)
    }

    /// Iterates terms from the largest monomial down.
    pub fn iter(&self) -> impl Iterator<Item = (&Monomial, &F)> {
        self.terms
            .iter()
            .rev()
            .map(|(monomial, coefficient)| (monomial.get(), coefficient))
    }

    /// Iterates terms from the smallest monomial up.
    pub fn iter_rev(&self) -> impl Iterator<Item = (&Monomial, &F)> {
        self.terms
            .iter()
            .map(|(monomial, coefficient)| (monomial.get(), coefficient))
    }

    /// Merges one term into the polynomial.
    ///
    /// Locates the slot for the monomial, combines the coefficients
    /// and erases the entry if the combined coefficient is zero.
    /// Every arithmetic path routes through here, which is what
    /// keeps the no-zero-coefficient invariant.
    pub fn add_term(&mut self, monomial: Monomial, coefficient: F) {
        if coefficient.is_zero() {
            return;
        }

        match self.terms.entry(OrderedMonomial::new(monomial)) {
            Entry::Vacant(slot) => {
                slot.insert(coefficient);
            }
            Entry::Occupied(mut slot) => {
                let combined = slot.get().clone() + coefficient;
                if combined.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = combined;
                }
            }
        }
    }

    /// Merges the negation of one term into the polynomial.
    pub fn sub_term(&mut self, monomial: Monomial, coefficient: F) {
        self.add_term(monomial, -coefficient);
    }

    /// Multiplies by a single term.
    #[must_use]
    pub fn mul_term(&self, monomial: &Monomial, coefficient: &F) -> Self {
        let mut product = Self::zero();
        for (m, c) in self.iter() {
            product.add_term(m * monomial, c.clone() * coefficient.clone());
        }

        product
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, coefficient: &F) -> Self {
        self.mul_term(&Monomial::one(), coefficient)
    }

    /// Rebuilds the polynomial under another order by re-inserting
    /// every term.
    #[must_use]
    pub fn reorder<P: MonomialOrder>(&self) -> Polynomial<F, P> {
        Polynomial::from_terms(
            self.iter()
                .map(|(monomial, coefficient)| (monomial.clone(), coefficient.clone())),
        )
    }
}

impl<F: Field, O: MonomialOrder> Default for Polynomial<F, O> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Field, O: MonomialOrder> From<Monomial> for Polynomial<F, O> {
    fn from(monomial: Monomial) -> Self {
        let mut polynomial = Self::zero();
        polynomial.add_term(monomial, F::one());

        polynomial
    }
}

impl<F: Field, O: MonomialOrder> From<Term<F>> for Polynomial<F, O> {
    fn from(term: Term<F>) -> Self {
        let (monomial, coefficient) = term.into_parts();
        let mut polynomial = Self::zero();
        polynomial.add_term(monomial, coefficient);

        polynomial
    }
}

impl<F: Field, O: MonomialOrder> FromIterator<(Monomial, F)> for Polynomial<F, O> {
    fn from_iter<I: IntoIterator<Item = (Monomial, F)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

// The induced total order on polynomials: lexicographic on the
// largest-first term sequences. This is what makes `PolynomialSet`
// iteration deterministic.
impl<F: Field + Ord, O: MonomialOrder> PartialOrd for Polynomial<F, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Field + Ord, O: MonomialOrder> Ord for Polynomial<F, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.iter();
        let mut rhs = other.iter();

        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some((lm, lc)), Some((rm, rc))) => {
                    match O::cmp(lm, rm).then_with(|| lc.cmp(rc)) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
            }
        }
    }
}

impl<F: Field, O: MonomialOrder> Neg for &Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn neg(self) -> Self::Output {
        let mut negated = Polynomial::zero();
        for (monomial, coefficient) in self.iter() {
            negated.add_term(monomial.clone(), -coefficient.clone());
        }

        negated
    }
}

impl<F: Field, O: MonomialOrder> Neg for Polynomial<F, O> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<F: Field, O: MonomialOrder> AddAssign<&Polynomial<F, O>> for Polynomial<F, O> {
    fn add_assign(&mut self, rhs: &Polynomial<F, O>) {
        for (monomial, coefficient) in rhs.iter() {
            self.add_term(monomial.clone(), coefficient.clone());
        }
    }
}

impl<F: Field, O: MonomialOrder> AddAssign for Polynomial<F, O> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<F: Field, O: MonomialOrder> Add for &Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += rhs;

        sum
    }
}

impl<F: Field, O: MonomialOrder> Add for Polynomial<F, O> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<F: Field, O: MonomialOrder> SubAssign<&Polynomial<F, O>> for Polynomial<F, O> {
    fn sub_assign(&mut self, rhs: &Polynomial<F, O>) {
        for (monomial, coefficient) in rhs.iter() {
            self.sub_term(monomial.clone(), coefficient.clone());
        }
    }
}

impl<F: Field, O: MonomialOrder> SubAssign for Polynomial<F, O> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<F: Field, O: MonomialOrder> Sub for &Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= rhs;

        difference
    }
}

impl<F: Field, O: MonomialOrder> Sub for Polynomial<F, O> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl<F: Field, O: MonomialOrder> Mul for &Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = Polynomial::zero();
        for (lm, lc) in self.iter() {
            for (rm, rc) in rhs.iter() {
                product.add_term(lm * rm, lc.clone() * rc.clone());
            }
        }

        product
    }
}

impl<F: Field, O: MonomialOrder> Mul for Polynomial<F, O> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<F: Field, O: MonomialOrder> MulAssign<&Polynomial<F, O>> for Polynomial<F, O> {
    fn mul_assign(&mut self, rhs: &Polynomial<F, O>) {
        *self = &*self * rhs;
    }
}

impl<F: Field, O: MonomialOrder> MulAssign for Polynomial<F, O> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl<F: Field + OrderedRing, O: MonomialOrder> fmt::Display for Polynomial<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = self.iter().peekable();
        if terms.peek().is_some_and(|(_, c)| c.is_negative()) {
            write!(f, "-")?;
        }

        while let Some((monomial, coefficient)) = terms.next() {
            let magnitude = coefficient.abs();
            if monomial.is_one() {
                write!(f, "{magnitude}")?;
            } else {
                if !magnitude.is_one() {
                    write!(f, "{magnitude}")?;
                }
                write!(f, "{monomial}")?;
            }

            if let Some((_, next)) = terms.peek() {
                f.write_str(if next.is_negative() { " - " } else { " + " })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::GradedLex;
    use groebner_rings::Q;

    fn m(degrees: &[i64]) -> Monomial {
        Monomial::new(degrees.iter().copied())
    }

    fn poly(terms: &[(&[i64], i64)]) -> Polynomial<Q, Lex> {
        Polynomial::from_terms(
            terms
                .iter()
                .map(|(degrees, n)| (m(degrees), Q::from_integer(*n))),
        )
    }

    #[test]
    fn test_constructors_drop_zeros() {
        assert!(Polynomial::<Q, Lex>::constant(Q::from_integer(0)).is_zero());
        assert!(poly(&[(&[1], 0)]).is_zero());
        assert_eq!(poly(&[(&[1], 2), (&[1], -2)]), Polynomial::zero());
    }

    #[test]
    fn test_duplicate_monomials_merge() {
        let p = poly(&[(&[1], 2), (&[1], 3)]);
        assert_eq!(p.term_count(), 1);
        assert_eq!(p.leading_coefficient(), Some(&Q::from_integer(5)));
    }

    #[test]
    fn test_leading_term_depends_on_order() {
        let monomials = [
            m(&[1, 2, 3]),
            m(&[1, 2, 4]),
            m(&[2, 2, 2]),
            m(&[6, 0, 0]),
        ];

        let lex: Polynomial<Q, Lex> = monomials
            .iter()
            .map(|mono| (mono.clone(), Q::from_integer(1)))
            .collect();
        assert_eq!(lex.leading_monomial(), Some(&m(&[6])));

        let graded = lex.reorder::<GradedLex>();
        assert_eq!(graded.leading_monomial(), Some(&m(&[1, 2, 4])));
    }

    #[test]
    fn test_add_sub() {
        // p = x_0 x_1 x_2^2 + 8 x_1
        let p = poly(&[(&[1, 1, 2], 1), (&[0, 1], 8)]);
        assert!((&p - &p).is_zero());

        let doubled = &p + &p;
        assert_eq!(doubled, p.scale(&Q::from_integer(2)));
    }

    #[test]
    fn test_mul() {
        // (x + 1)(x - 1) = x^2 - 1
        let lhs = poly(&[(&[1], 1), (&[], 1)]);
        let rhs = poly(&[(&[1], 1), (&[], -1)]);
        assert_eq!(&lhs * &rhs, poly(&[(&[2], 1), (&[], -1)]));

        assert!((&lhs * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_nth_term_runs_largest_first() {
        let p = poly(&[(&[], 5), (&[2], 1), (&[1], -3)]);
        assert_eq!(p.nth_term(0), Some((&m(&[2]), &Q::from_integer(1))));
        assert_eq!(p.nth_term(1), Some((&m(&[1]), &Q::from_integer(-3))));
        assert_eq!(p.nth_term(2), Some((&Monomial::one(), &Q::from_integer(5))));
        assert_eq!(p.nth_term(3), None);
    }

    #[test]
    fn test_display() {
        let p = poly(&[(&[2], 1), (&[1], -3), (&[], 5)]);
        assert_eq!(p.to_string(), "(x_0^2) - 3(x_0) + 5");

        let q = poly(&[(&[1], -1), (&[], -1)]);
        assert_eq!(q.to_string(), "-(x_0) - 1");

        assert_eq!(Polynomial::<Q, Lex>::zero().to_string(), "0");
        assert_eq!(poly(&[(&[], -2)]).to_string(), "-2");
    }

    #[test]
    fn test_reorder_preserves_terms() {
        let p = poly(&[(&[1, 2], 3), (&[3], -1), (&[0, 0, 1], 7)]);
        let graded = p.reorder::<GradedLex>();
        assert_eq!(graded.term_count(), 3);
        assert_eq!(graded.reorder::<Lex>(), p);
    }
}
