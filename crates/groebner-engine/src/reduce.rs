//! Elementary reductions and normal forms.
//!
//! An elementary reduction cancels one reducible term; chains of
//! them, swept over a whole set until a sweep does nothing, produce
//! a normal form.

use groebner_poly::{MonomialOrder, Polynomial, PolynomialSet, Term};
use groebner_rings::Field;

/// Performs one elementary reduction of `reducible` by `reducer`.
///
/// Scans the terms of `reducible` from the largest down for one
/// divisible by the leading monomial of `reducer`; subtracts the
/// matching single-term multiple of `reducer` so that term cancels
/// exactly. Returns false (leaving `reducible` untouched) when no
/// term is divisible.
///
/// # Panics
///
/// Panics if `reducer` is zero.
pub fn reduce_once<F: Field, O: MonomialOrder>(
    reducible: &mut Polynomial<F, O>,
    reducer: &Polynomial<F, O>,
) -> bool {
    let (lead, lead_coefficient) = reducer
        .leading_term()
        .expect("cannot reduce by the zero polynomial");

    let target = reducible
        .iter()
        .find(|(monomial, _)| monomial.is_divisible_by(lead))
        .map(|(monomial, coefficient)| (monomial.clone(), coefficient.clone()));

    let Some((monomial, coefficient)) = target else {
        return false;
    };

    // Divisibility was just checked and stored coefficients are
    // never zero, so both divisions are total.
    let quotient = Term::new(
        monomial
            .checked_div(lead)
            .expect("target term is divisible by the leading monomial"),
        coefficient.field_div(lead_coefficient),
    );

    *reducible -= &reducer.mul_term(quotient.monomial(), quotient.coefficient());

    true
}

/// Reduces `reducible` by `reducer` until no term is divisible.
///
/// Returns the number of elementary reductions performed.
pub fn reduce_by<F: Field, O: MonomialOrder>(
    reducible: &mut Polynomial<F, O>,
    reducer: &Polynomial<F, O>,
) -> usize {
    let mut count = 0;
    while reduce_once(reducible, reducer) {
        count += 1;
    }

    count
}

/// One sweep: chains `reduce_by` over every member of the set once.
///
/// A single sweep may expose terms reducible by members already
/// passed; callers that need a normal form iterate via
/// [`normal_form_in_place`].
pub fn reduce_over_set<F: Field + Ord, O: MonomialOrder>(
    reducible: &mut Polynomial<F, O>,
    set: &PolynomialSet<F, O>,
) -> usize {
    set.iter().map(|reducer| reduce_by(reducible, reducer)).sum()
}

/// Sweeps the set until one sweep performs no reduction, leaving
/// `reducible` in normal form modulo the set.
///
/// Returns the total number of elementary reductions performed.
pub fn normal_form_in_place<F: Field + Ord, O: MonomialOrder>(
    reducible: &mut Polynomial<F, O>,
    set: &PolynomialSet<F, O>,
) -> usize {
    let mut total = 0;
    loop {
        let swept = reduce_over_set(reducible, set);
        if swept == 0 {
            return total;
        }
        total += swept;
    }
}

/// Returns the normal form of `reducible` modulo the set.
#[must_use]
pub fn normal_form<F: Field + Ord, O: MonomialOrder>(
    mut reducible: Polynomial<F, O>,
    set: &PolynomialSet<F, O>,
) -> Polynomial<F, O> {
    normal_form_in_place(&mut reducible, set);

    reducible
}
