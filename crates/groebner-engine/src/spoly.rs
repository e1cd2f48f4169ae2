//! S-polynomials and the coprimality criterion.

use groebner_poly::{Monomial, MonomialOrder, Polynomial};
use groebner_rings::Field;

/// Computes the S-polynomial of two non-zero polynomials.
///
/// With leading terms `(m1, c1)` and `(m2, c2)` and
/// `L = lcm(m1, m2)`, the S-polynomial is
/// `(L/m1)·first·c2 − (L/m2)·second·c1`. The monomial multipliers
/// and the scalar leading coefficients are applied separately, so
/// both products share the leading term `(L, c1·c2)` and it cancels
/// by construction.
///
/// # Panics
///
/// Panics if either polynomial is zero.
#[must_use]
pub fn s_polynomial<F: Field, O: MonomialOrder>(
    first: &Polynomial<F, O>,
    second: &Polynomial<F, O>,
) -> Polynomial<F, O> {
    let (m1, c1) = first
        .leading_term()
        .expect("s-polynomial of the zero polynomial");
    let (m2, c2) = second
        .leading_term()
        .expect("s-polynomial of the zero polynomial");

    let lcm = Monomial::lcm(m1, m2);

    // lcm is divisible by both arguments, so these divisions are total.
    let left = first.mul_term(&(&lcm / m1), c2);
    let right = second.mul_term(&(&lcm / m2), c1);

    left - right
}

/// Buchberger's first criterion.
///
/// When the leading monomials are coprime (their product equals
/// their lcm), the S-polynomial reduces to zero over any set
/// containing the pair, so the pair can be skipped.
///
/// # Panics
///
/// Panics if either polynomial is zero.
#[must_use]
pub fn leading_terms_coprime<F: Field, O: MonomialOrder>(
    first: &Polynomial<F, O>,
    second: &Polynomial<F, O>,
) -> bool {
    let m1 = first
        .leading_monomial()
        .expect("coprimality criterion on the zero polynomial");
    let m2 = second
        .leading_monomial()
        .expect("coprimality criterion on the zero polynomial");

    m1.is_coprime(m2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groebner_poly::Lex;
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
    fn test_s_polynomial_cancels_leading_terms() {
        // f = x y + 2x - z, g = x^2 + 2y - z
        let f = poly(&[(&[1, 1], 1), (&[1], 2), (&[0, 0, 1], -1)]);
        let g = poly(&[(&[2], 1), (&[0, 1], 2), (&[0, 0, 1], -1)]);

        // S(f, g) = x*f - y*g = 2x^2 - xz - 2y^2 + yz
        let expected = poly(&[
            (&[2], 2),
            (&[1, 0, 1], -1),
            (&[0, 2], -2),
            (&[0, 1, 1], 1),
        ]);
        assert_eq!(s_polynomial(&f, &g), expected);
    }

    #[test]
    fn test_s_polynomial_of_equal_leading_terms() {
        // Both lead with x^2: the S-polynomial is just the difference
        // of the tails.
        let f = poly(&[(&[2], 1), (&[1], 1)]);
        let g = poly(&[(&[2], 1), (&[], 1)]);
        assert_eq!(s_polynomial(&f, &g), poly(&[(&[1], 1), (&[], -1)]));
    }

    #[test]
    fn test_coprime_criterion() {
        let f = poly(&[(&[2], 1), (&[0, 1], 1)]);
        let g = poly(&[(&[0, 3], 1), (&[], 1)]);
        assert!(leading_terms_coprime(&f, &g));

        let h = poly(&[(&[1, 1], 1)]);
        assert!(!leading_terms_coprime(&f, &h));
    }
}
