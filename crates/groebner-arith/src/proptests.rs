//! Property-based tests for the exact-arithmetic layer.

use proptest::prelude::*;

use crate::{CheckedInt, Rational};

// Strategy for generating small integers, safe for rational arithmetic
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn in_range_i8(wide: i128) -> bool {
    i128::from(i8::MIN) <= wide && wide <= i128::from(i8::MAX)
}

proptest! {
    // CheckedInt predicates are tight: each one returns true exactly
    // when the widened result escapes the representable range.

    #[test]
    fn neg_predicate_tight(a in any::<i8>()) {
        let escapes = !in_range_i8(-i128::from(a));
        prop_assert_eq!(CheckedInt::<i8>::neg_overflows(a), escapes);
    }

    #[test]
    fn add_predicate_tight(a in any::<i8>(), b in any::<i8>()) {
        let escapes = !in_range_i8(i128::from(a) + i128::from(b));
        prop_assert_eq!(CheckedInt::<i8>::add_overflows(a, b), escapes);
    }

    #[test]
    fn sub_predicate_tight(a in any::<i8>(), b in any::<i8>()) {
        let escapes = !in_range_i8(i128::from(a) - i128::from(b));
        prop_assert_eq!(CheckedInt::<i8>::sub_overflows(a, b), escapes);
    }

    #[test]
    fn mul_predicate_tight(a in any::<i8>(), b in any::<i8>()) {
        let escapes = !in_range_i8(i128::from(a) * i128::from(b));
        prop_assert_eq!(CheckedInt::<i8>::mul_overflows(a, b), escapes);
    }

    #[test]
    fn div_predicate_tight(a in any::<i8>(), b in any::<i8>()) {
        let escapes = b == 0 || !in_range_i8(i128::from(a) / i128::from(b));
        prop_assert_eq!(CheckedInt::<i8>::div_overflows(a, b), escapes);
    }

    #[test]
    fn add_predicate_tight_i64(a in any::<i64>(), b in any::<i64>()) {
        let wide = i128::from(a) + i128::from(b);
        let escapes = wide < i128::from(i64::MIN) || wide > i128::from(i64::MAX);
        prop_assert_eq!(CheckedInt::<i64>::add_overflows(a, b), escapes);
    }

    #[test]
    fn mul_predicate_tight_i64(a in any::<i64>(), b in any::<i64>()) {
        let wide = i128::from(a) * i128::from(b);
        let escapes = wide < i128::from(i64::MIN) || wide > i128::from(i64::MAX);
        prop_assert_eq!(CheckedInt::<i64>::mul_overflows(a, b), escapes);
    }

    // GCD and LCM

    #[test]
    fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
        let g = CheckedInt::gcd(CheckedInt::new(a), CheckedInt::new(b));
        prop_assert!(!g.is_negative());
        prop_assert_eq!(a % g.get(), 0);
        prop_assert_eq!(b % g.get(), 0);
    }

    #[test]
    fn lcm_is_common_multiple(a in non_zero_int(), b in non_zero_int()) {
        let m = CheckedInt::lcm(CheckedInt::new(a), CheckedInt::new(b));
        prop_assert_eq!(m.get() % a, 0);
        prop_assert_eq!(m.get() % b, 0);
    }

    // Rational normal form

    #[test]
    fn rational_normal_form(n in small_int(), d in non_zero_int()) {
        let r = Rational::new(n, d).unwrap();
        prop_assert!(!r.denominator().is_negative());
        let g = CheckedInt::gcd(r.numerator(), r.denominator());
        prop_assert_eq!(g.get(), 1);
    }

    // Rational ring laws

    #[test]
    fn rational_add_commutative(
        na in small_int(), da in non_zero_int(),
        nb in small_int(), db in non_zero_int()
    ) {
        let a = Rational::new(na, da).unwrap();
        let b = Rational::new(nb, db).unwrap();
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn rational_add_associative(
        na in small_int(), da in non_zero_int(),
        nb in small_int(), db in non_zero_int(),
        nc in small_int(), dc in non_zero_int()
    ) {
        let a = Rational::new(na, da).unwrap();
        let b = Rational::new(nb, db).unwrap();
        let c = Rational::new(nc, dc).unwrap();
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn rational_mul_commutative(
        na in small_int(), da in non_zero_int(),
        nb in small_int(), db in non_zero_int()
    ) {
        let a = Rational::new(na, da).unwrap();
        let b = Rational::new(nb, db).unwrap();
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn rational_mul_associative(
        na in small_int(), da in non_zero_int(),
        nb in small_int(), db in non_zero_int(),
        nc in small_int(), dc in non_zero_int()
    ) {
        let a = Rational::new(na, da).unwrap();
        let b = Rational::new(nb, db).unwrap();
        let c = Rational::new(nc, dc).unwrap();
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn rational_distributive(
        na in small_int(), da in non_zero_int(),
        nb in small_int(), db in non_zero_int(),
        nc in small_int(), dc in non_zero_int()
    ) {
        let a = Rational::new(na, da).unwrap();
        let b = Rational::new(nb, db).unwrap();
        let c = Rational::new(nc, dc).unwrap();
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn rational_identities(n in small_int(), d in non_zero_int()) {
        let a = Rational::new(n, d).unwrap();
        let zero = Rational::from_integer(0);
        let one = Rational::from_integer(1);
        prop_assert_eq!(a + zero, a);
        prop_assert_eq!(a * one, a);
    }

    #[test]
    fn rational_additive_inverse(n in small_int(), d in non_zero_int()) {
        let a = Rational::new(n, d).unwrap();
        prop_assert_eq!(a + (-a), Rational::from_integer(0));
    }

    #[test]
    fn rational_multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
        let a = Rational::new(n, d).unwrap();
        let b = Rational::new(d, n).unwrap();
        prop_assert_eq!(a * b, Rational::from_integer(1));
    }
}
