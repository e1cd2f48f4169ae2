//! Monomials: products of indexed variables.
//!
//! A monomial is an exponent vector indexed by variable number, with
//! trailing zeros stripped so that equal monomials have equal
//! representations. Exponents are overflow-detected integers, so
//! degree arithmetic inherits overflow detection.

use smallvec::SmallVec;
use std::fmt;
use std::ops::{Div, Mul, MulAssign};
use thiserror::Error;

use groebner_arith::CheckedInt;

/// The exponent type. Divisibility is checked before any exponent
/// subtraction, so degrees never go negative.
pub type Degree = CheckedInt<i64>;

/// Error returned when dividing a monomial by one that does not
/// divide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("monomial is not divisible by the requested divisor")]
pub struct IndivisibleMonomial;

/// A product of indexed variables with non-negative exponents.
///
/// Purely combinatorial: a monomial carries no coefficient. The
/// exponent vector keeps no trailing zeros, so `(1, 2, 3)` and
/// `(1, 2, 3, 0)` are the same monomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    degrees: SmallVec<[Degree; 4]>,
}

impl Monomial {
    /// Creates a monomial from an exponent sequence.
    #[must_use]
    pub fn new(degrees: impl IntoIterator<Item = i64>) -> Self {
        let mut monomial = Self {
            degrees: degrees.into_iter().map(CheckedInt::new).collect(),
        };
        monomial.shrink();

        monomial
    }

    /// Creates the empty monomial (the multiplicative unit).
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial `x_index`.
    #[must_use]
    pub fn var(index: usize) -> Self {
        let mut monomial = Self::default();
        monomial.set_degree(index, 1);

        monomial
    }

    /// Returns true if this is the empty monomial.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Returns the exponent of `x_index`; zero past the stored length.
    #[must_use]
    pub fn degree(&self, index: usize) -> Degree {
        self.degrees.get(index).copied().unwrap_or_default()
    }

    /// Sets the exponent of `x_index`, growing or shrinking the
    /// vector as needed.
    pub fn set_degree(&mut self, index: usize, degree: i64) {
        if index >= self.degrees.len() {
            if degree == 0 {
                return;
            }
            self.degrees.resize(index + 1, Degree::default());
        }
        self.degrees[index] = CheckedInt::new(degree);
        self.shrink();
    }

    /// Returns the number of variables mentioned, i.e. one past the
    /// highest index with a non-zero exponent.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.degrees.len()
    }

    /// Returns the stored exponent vector (no trailing zeros).
    #[must_use]
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Returns the sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> Degree {
        self.degrees
            .iter()
            .fold(Degree::default(), |total, d| total + *d)
    }

    /// Returns true if `divisor` divides this monomial, i.e. every
    /// exponent of `divisor` is at most ours. The empty monomial
    /// divides everything.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        divisor
            .degrees
            .iter()
            .enumerate()
            .all(|(index, d)| *d <= self.degree(index))
    }

    /// Divides by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`IndivisibleMonomial`] when `divisor` does not divide
    /// this monomial; the receiver is left untouched.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, IndivisibleMonomial> {
        if !self.is_divisible_by(divisor) {
            return Err(IndivisibleMonomial);
        }

        let mut degrees = self.degrees.clone();
        for (index, d) in divisor.degrees.iter().enumerate() {
            degrees[index] = degrees[index] - *d;
        }

        let mut quotient = Self { degrees };
        quotient.shrink();

        Ok(quotient)
    }

    /// Computes the least common multiple: the element-wise maximum
    /// of the exponent vectors.
    #[must_use]
    pub fn lcm(lhs: &Self, rhs: &Self) -> Self {
        let len = lhs.degrees.len().max(rhs.degrees.len());
        let degrees = (0..len)
            .map(|index| lhs.degree(index).max(rhs.degree(index)))
            .collect();

        Self { degrees }
    }

    /// Computes the greatest common divisor: the element-wise minimum
    /// of the exponent vectors.
    #[must_use]
    pub fn gcd(lhs: &Self, rhs: &Self) -> Self {
        let len = lhs.degrees.len().min(rhs.degrees.len());
        let degrees = (0..len)
            .map(|index| lhs.degree(index).min(rhs.degree(index)))
            .collect();

        let mut result = Self { degrees };
        result.shrink();

        result
    }

    /// Returns true if the two monomials share no variable.
    ///
    /// Equivalently, their product equals their lcm.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        let len = self.degrees.len().min(other.degrees.len());
        (0..len).all(|index| self.degree(index).is_zero() || other.degree(index).is_zero())
    }

    fn shrink(&mut self) {
        while self.degrees.last().is_some_and(|d| d.is_zero()) {
            self.degrees.pop();
        }
    }
}

impl MulAssign<&Monomial> for Monomial {
    fn mul_assign(&mut self, rhs: &Monomial) {
        if rhs.degrees.len() > self.degrees.len() {
            self.degrees.resize(rhs.degrees.len(), Degree::default());
        }
        for (index, d) in rhs.degrees.iter().enumerate() {
            self.degrees[index] = self.degrees[index] + *d;
        }
        self.shrink();
    }
}

impl Mul for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = self.clone();
        product *= rhs;

        product
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= &rhs;
        self
    }
}

impl Div for &Monomial {
    type Output = Monomial;

    /// # Panics
    ///
    /// Panics when `rhs` does not divide `self`; use
    /// [`Monomial::checked_div`] to surface the error instead.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("monomial is not divisible by the requested divisor")
    }
}

impl Div for Monomial {
    type Output = Monomial;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        write!(f, "(")?;
        let mut separate = false;
        for (index, degree) in self.degrees.iter().enumerate() {
            if degree.is_zero() {
                continue;
            }
            if separate {
                write!(f, " * ")?;
            }
            if degree.get() == 1 {
                write!(f, "x_{index}")?;
            } else {
                write!(f, "x_{index}^{degree}")?;
            }
            separate = true;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(degrees: &[i64]) -> Monomial {
        Monomial::new(degrees.iter().copied())
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        assert_eq!(m(&[1, 2, 3]), m(&[1, 2, 3, 0]));
        assert_eq!(m(&[0, 0]), Monomial::one());
        assert_eq!(m(&[1, 2, 3, 0]).variable_count(), 3);
    }

    #[test]
    fn test_mul() {
        assert_eq!(m(&[1, 2, 3]) * m(&[1, 2, 3, 4]), m(&[2, 4, 6, 4]));
        assert_eq!(m(&[1]) * Monomial::one(), m(&[1]));
    }

    #[test]
    fn test_divisibility() {
        assert!(m(&[1, 2, 3, 4]).is_divisible_by(&m(&[0, 0, 0, 4])));
        assert!(!m(&[0, 0, 0, 4]).is_divisible_by(&m(&[1, 2, 3, 4])));
        assert!(m(&[2, 1]).is_divisible_by(&Monomial::one()));
        assert!(m(&[1, 2]).is_divisible_by(&m(&[0, 2])));
    }

    #[test]
    fn test_div() {
        assert_eq!(m(&[1, 2, 3, 4]) / m(&[0, 0, 0, 4]), m(&[1, 2, 3]));
        assert_eq!(
            m(&[1, 1]).checked_div(&m(&[2])),
            Err(IndivisibleMonomial)
        );
    }

    #[test]
    fn test_lcm_gcd() {
        assert_eq!(Monomial::lcm(&m(&[1, 0, 2]), &m(&[0, 3])), m(&[1, 3, 2]));
        assert_eq!(Monomial::gcd(&m(&[1, 0, 2]), &m(&[0, 3])), Monomial::one());
        assert_eq!(Monomial::gcd(&m(&[2, 1]), &m(&[1, 2])), m(&[1, 1]));
        assert_eq!(Monomial::lcm(&m(&[2]), &Monomial::one()), m(&[2]));
    }

    #[test]
    fn test_coprime() {
        assert!(m(&[2, 0]).is_coprime(&m(&[0, 3])));
        assert!(!m(&[2, 1]).is_coprime(&m(&[0, 3])));
        assert!(Monomial::one().is_coprime(&m(&[5])));
    }

    #[test]
    fn test_total_degree() {
        assert_eq!(m(&[1, 2, 3]).total_degree().get(), 6);
        assert_eq!(Monomial::one().total_degree().get(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(m(&[2, 0, 1]).to_string(), "(x_0^2 * x_2)");
        assert_eq!(m(&[0, 1]).to_string(), "(x_1)");
        assert_eq!(Monomial::one().to_string(), "1");
    }
}
