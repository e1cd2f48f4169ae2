//! Property-based tests for monomials, orders and polynomials.

use proptest::prelude::*;

use groebner_rings::Q;

use crate::monomial::Monomial;
use crate::ordering::{GradedLex, GradedRevLex, Lex, MonomialOrder, RevLex};
use crate::polynomial::Polynomial;

// Strategy for generating monomials with small exponents
fn monomial() -> impl Strategy<Value = Monomial> {
    proptest::collection::vec(0i64..5, 0..5).prop_map(Monomial::new)
}

// Strategy for generating polynomials over Q with small terms
fn polynomial() -> impl Strategy<Value = Polynomial<Q, Lex>> {
    proptest::collection::vec((monomial(), -20i64..20), 0..6).prop_map(|terms| {
        Polynomial::from_terms(
            terms
                .into_iter()
                .map(|(m, n)| (m, Q::from_integer(n))),
        )
    })
}

fn holds_invariant(p: &Polynomial<Q, Lex>) -> bool {
    p.iter().all(|(_, c)| !c.is_zero())
}

proptest! {
    // Monomial lattice laws

    #[test]
    fn monomial_divides_its_multiples(m in monomial(), n in monomial()) {
        let product = &m * &n;
        prop_assert!(product.is_divisible_by(&m));
        prop_assert!(product.is_divisible_by(&n));
    }

    #[test]
    fn monomial_mul_div_roundtrip(m in monomial(), n in monomial()) {
        let product = &m * &n;
        prop_assert_eq!(product.checked_div(&n).unwrap(), m);
    }

    #[test]
    fn monomial_lcm_commutative(m in monomial(), n in monomial()) {
        prop_assert_eq!(Monomial::lcm(&m, &n), Monomial::lcm(&n, &m));
    }

    #[test]
    fn monomial_lcm_associative(m in monomial(), n in monomial(), p in monomial()) {
        prop_assert_eq!(
            Monomial::lcm(&Monomial::lcm(&m, &n), &p),
            Monomial::lcm(&m, &Monomial::lcm(&n, &p))
        );
    }

    #[test]
    fn monomial_lcm_unit(m in monomial()) {
        prop_assert_eq!(Monomial::lcm(&m, &Monomial::one()), m.clone());
    }

    #[test]
    fn monomial_coprime_iff_product_is_lcm(m in monomial(), n in monomial()) {
        prop_assert_eq!(m.is_coprime(&n), &m * &n == Monomial::lcm(&m, &n));
    }

    // Order admissibility

    #[test]
    fn unit_monomial_is_smallest(m in monomial()) {
        use std::cmp::Ordering;
        prop_assume!(!m.is_one());
        let one = Monomial::one();
        prop_assert_eq!(Lex::cmp(&one, &m), Ordering::Less);
        prop_assert_eq!(GradedLex::cmp(&one, &m), Ordering::Less);
        prop_assert_eq!(GradedRevLex::cmp(&one, &m), Ordering::Less);
    }

    #[test]
    fn orders_respect_multiplication(m in monomial(), n in monomial(), p in monomial()) {
        let mp = &m * &p;
        let np = &n * &p;
        prop_assert_eq!(Lex::cmp(&mp, &np), Lex::cmp(&m, &n));
        prop_assert_eq!(RevLex::cmp(&mp, &np), RevLex::cmp(&m, &n));
        prop_assert_eq!(GradedLex::cmp(&mp, &np), GradedLex::cmp(&m, &n));
        prop_assert_eq!(GradedRevLex::cmp(&mp, &np), GradedRevLex::cmp(&m, &n));
    }

    // Polynomial invariants

    #[test]
    fn no_zero_coefficients_survive(p in polynomial(), q in polynomial()) {
        prop_assert!(holds_invariant(&(&p + &q)));
        prop_assert!(holds_invariant(&(&p - &q)));
        prop_assert!(holds_invariant(&(&p * &q)));
    }

    #[test]
    fn additive_inverse(p in polynomial()) {
        prop_assert!((&p + &(-&p)).is_zero());
    }

    #[test]
    fn multiplicative_identities(p in polynomial()) {
        let one = Polynomial::constant(Q::from_integer(1));
        prop_assert_eq!(&p * &one, p.clone());
        prop_assert!((&p * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn addition_commutative(p in polynomial(), q in polynomial()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn multiplication_distributes(p in polynomial(), q in polynomial(), r in polynomial()) {
        prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
    }

    #[test]
    fn reorder_roundtrip(p in polynomial()) {
        prop_assert_eq!(p.reorder::<GradedLex>().reorder::<Lex>(), p.clone());
    }
}
