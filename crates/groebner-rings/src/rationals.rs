//! The field of rational numbers.
//!
//! The arith crate owns the representation; this module attaches the
//! algebraic capabilities so rationals can serve as polynomial
//! coefficients. `Q` is the everyday instantiation over `i64`.

use groebner_arith::{MachineInt, Rational};
use num_traits::{One, Zero};

use crate::traits::{Field, OrderedRing, Ring};

/// The field of rational numbers over `i64`, the reference
/// coefficient field.
pub type Q = Rational<i64>;

impl<T: MachineInt> Ring for Rational<T> {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }
}

impl<T: MachineInt> Field for Rational<T> {
    fn inv(&self) -> Option<Self> {
        self.inverse().ok()
    }
}

impl<T: MachineInt> OrderedRing for Rational<T> {
    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn signum(&self) -> i8 {
        Rational::signum(self)
    }
}
