//! Cyclic-n seed ideals.
//!
//! The classical stress test for completion: the elementary
//! symmetric polynomials in n variables, with the top one shifted by
//! a constant so the system has finitely many solutions.

use groebner_poly::{Monomial, MonomialOrder, Polynomial, PolynomialSet};
use groebner_rings::Field;

// Include/exclude walk over the variables: every squarefree monomial
// with `remaining` variables picked from index onward lands in the
// polynomial.
fn collect_squarefree<F: Field, O: MonomialOrder>(
    index: usize,
    remaining: usize,
    variables: usize,
    monomial: &mut Monomial,
    polynomial: &mut Polynomial<F, O>,
) {
    if remaining == 0 {
        polynomial.add_term(monomial.clone(), F::one());
        return;
    }

    if index == variables {
        return;
    }

    monomial.set_degree(index, 1);
    collect_squarefree(index + 1, remaining - 1, variables, monomial, polynomial);
    monomial.set_degree(index, 0);
    collect_squarefree(index + 1, remaining, variables, monomial, polynomial);
}

/// The elementary symmetric polynomial: the sum of all squarefree
/// monomials of the given degree in the first `variables` variables.
#[must_use]
pub fn elementary_symmetric<F: Field, O: MonomialOrder>(
    degree: usize,
    variables: usize,
) -> Polynomial<F, O> {
    let mut polynomial = Polynomial::zero();
    let mut monomial = Monomial::one();
    collect_squarefree(0, degree, variables, &mut monomial, &mut polynomial);

    polynomial
}

/// The cyclic-n seed set: the elementary symmetric polynomials
/// `σ_1, …, σ_{n-1}` together with `σ_n - 1`.
#[must_use]
pub fn cyclic_ideal<F: Field + Ord, O: MonomialOrder>(variables: usize) -> PolynomialSet<F, O> {
    let mut set = PolynomialSet::new();
    for degree in 1..=variables {
        let mut generator = elementary_symmetric(degree, variables);
        if degree == variables {
            generator -= &Polynomial::constant(F::one());
        }
        set.insert(generator);
    }

    set
}
