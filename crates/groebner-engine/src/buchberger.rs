//! Buchberger completion.
//!
//! The completion loop alternates three phases until it stabilizes:
//! scan ordered pairs for S-polynomials that survive reduction,
//! merge the survivors in, then inter-reduce and normalize the set.
//! The scan coming back empty means every S-polynomial reduces to
//! zero — the set is a Gröbner basis.

use rayon::prelude::*;

use groebner_poly::{MonomialOrder, Polynomial, PolynomialSet};
use groebner_rings::Field;

use crate::reduce::{normal_form, reduce_over_set};
use crate::spoly::{leading_terms_coprime, s_polynomial};

/// Configuration for the completion loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuchbergerConfig {
    /// Fan the pair scan out over rayon. Checking one pair against a
    /// frozen set is referentially transparent, so the result set is
    /// identical either way.
    pub parallel_pairs: bool,
}

/// Checks one pair of basis candidates.
///
/// Returns `None` when the coprimality criterion applies or the
/// S-polynomial's normal form over the set is zero; otherwise the
/// non-zero remainder that must join the basis.
#[must_use]
pub fn check_pair<F: Field + Ord, O: MonomialOrder>(
    first: &Polynomial<F, O>,
    second: &Polynomial<F, O>,
    set: &PolynomialSet<F, O>,
) -> Option<Polynomial<F, O>> {
    if leading_terms_coprime(first, second) {
        return None;
    }

    let remainder = normal_form(s_polynomial(first, second), set);
    if remainder.is_zero() {
        None
    } else {
        Some(remainder)
    }
}

/// Scans every unordered pair of distinct members and collects the
/// non-zero remainders their S-polynomials leave over the set.
///
/// Pairs are taken with the second member strictly before the first
/// in set order, so each pair is checked exactly once.
#[must_use]
pub fn find_pairs<F: Field + Ord, O: MonomialOrder>(
    set: &PolynomialSet<F, O>,
) -> PolynomialSet<F, O> {
    let mut discovered = PolynomialSet::new();
    for (position, first) in set.iter().enumerate() {
        for second in set.iter().take(position) {
            if let Some(remainder) = check_pair(first, second, set) {
                discovered.insert(remainder);
            }
        }
    }

    discovered
}

/// [`find_pairs`] with the pair checks fanned out over rayon.
///
/// Produces the same set: every check runs against the same frozen
/// snapshot.
#[must_use]
pub fn find_pairs_parallel<F, O>(set: &PolynomialSet<F, O>) -> PolynomialSet<F, O>
where
    F: Field + Ord + Send + Sync,
    O: MonomialOrder + Send + Sync,
{
    let members: Vec<&Polynomial<F, O>> = set.iter().collect();
    let mut pairs = Vec::new();
    for first in 0..members.len() {
        for second in 0..first {
            pairs.push((first, second));
        }
    }

    pairs
        .into_par_iter()
        .filter_map(|(first, second)| check_pair(members[first], members[second], set))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// One inter-reduction pass.
///
/// Extracts members one at a time; each extracted member is swept
/// against the unprocessed remainder and against the already
/// processed side, then dropped if it reduced to zero. Returns the
/// number of elementary reductions performed.
fn inter_reduction_pass<F: Field + Ord, O: MonomialOrder>(set: &mut PolynomialSet<F, O>) -> usize {
    let mut count = 0;
    let mut processed = PolynomialSet::new();

    while let Some(mut extracted) = set.pop_first() {
        count += reduce_over_set(&mut extracted, set);
        count += reduce_over_set(&mut extracted, &processed);

        // A zero remainder was redundant; `insert` drops it.
        processed.insert(extracted);
    }

    *set = processed;

    count
}

/// Inter-reduces the set until a whole pass performs no reduction.
///
/// Returns the total number of elementary reductions performed.
pub fn inter_reduce<F: Field + Ord, O: MonomialOrder>(set: &mut PolynomialSet<F, O>) -> usize {
    let mut total = 0;
    loop {
        let pass = inter_reduction_pass(set);
        if pass == 0 {
            return total;
        }
        total += pass;
    }
}

/// Scales every member so its leading coefficient is 1.
pub fn normalize<F: Field + Ord, O: MonomialOrder>(set: &mut PolynomialSet<F, O>) {
    let mut normalized = PolynomialSet::new();
    while let Some(member) = set.pop_first() {
        let inverse = member
            .leading_coefficient()
            .expect("set members are non-zero")
            .inv()
            .expect("leading coefficients are non-zero");
        normalized.insert(member.scale(&inverse));
    }

    *set = normalized;
}

fn complete<F: Field + Ord, O: MonomialOrder>(
    set: &mut PolynomialSet<F, O>,
    scan: impl Fn(&PolynomialSet<F, O>) -> PolynomialSet<F, O>,
) {
    let mut discovered = scan(set);
    inter_reduce(set);
    normalize(set);

    while !discovered.is_empty() {
        set.merge(discovered);
        discovered = scan(set);
        inter_reduce(set);
        normalize(set);
    }
}

/// Completes the set into the reduced monic Gröbner basis of its
/// ideal.
///
/// Terminates for any finite seed set by Buchberger's theorem; the
/// result is the unique reduced basis, independent of pair order.
pub fn buchberger<F: Field + Ord, O: MonomialOrder>(set: &mut PolynomialSet<F, O>) {
    complete(set, |snapshot| find_pairs(snapshot));
}

/// [`buchberger`] with explicit configuration.
pub fn buchberger_with<F, O>(set: &mut PolynomialSet<F, O>, config: BuchbergerConfig)
where
    F: Field + Ord + Send + Sync,
    O: MonomialOrder + Send + Sync,
{
    if config.parallel_pairs {
        complete(set, |snapshot| find_pairs_parallel(snapshot));
    } else {
        complete(set, |snapshot| find_pairs(snapshot));
    }
}

/// Convenience wrapper: consumes the seed set and returns its
/// Gröbner basis.
#[must_use]
pub fn groebner_basis<F: Field + Ord, O: MonomialOrder>(
    set: PolynomialSet<F, O>,
) -> PolynomialSet<F, O> {
    let mut basis = set;
    buchberger(&mut basis);

    basis
}
