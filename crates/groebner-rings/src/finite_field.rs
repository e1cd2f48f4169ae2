//! Finite fields Z_p.
//!
//! The optional modular coefficient field: the polynomial and
//! Gröbner layers only ever see the `Field` capability, so swapping
//! the rationals for a prime field is a type-parameter change.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Field, OrderedRing, Ring};

/// A finite field Z_p for a prime modulus `P`.
///
/// The value is always kept in `[0, P)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        if value >= 0 {
            Self::new(value.unsigned_abs())
        } else {
            Self((P - value.unsigned_abs() % P) % P)
        }
    }

    /// Returns the representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    /// Computes the modular inverse by the extended Euclidean
    /// algorithm.
    ///
    /// Returns `None` for zero (or when the value shares a factor
    /// with a non-prime modulus).
    #[must_use]
    pub fn inverse(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = i64::try_from(P).expect("modulus fits in i64");
        let mut new_r = i64::try_from(self.0).expect("value below modulus");

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        Some(Self::from_signed(t))
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        self.inverse()
    }
}

// A finite field carries no sign; `abs` is the identity so printed
// coefficients come out as their representatives.
impl<const P: u64> OrderedRing for FiniteField<P> {
    fn abs(&self) -> Self {
        *self
    }

    fn signum(&self) -> i8 {
        i8::from(self.0 != 0)
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 + P - rhs.0) % P)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let wide = u128::from(self.0) * u128::from(rhs.0) % u128::from(P);
        Self(u64::try_from(wide).expect("residue below modulus"))
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self((P - self.0) % P)
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
