// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exact fractions over signed integers.
//!
//! Invariants, re-established after every constructor, setter and operator:
//! - the fraction is in lowest terms;
//! - the denominator is strictly positive.
//!
//! With both invariants in place structural equality is numeric equality.
//! Construction and comparison never overflow: a value whose canonical form
//! does not fit the integer type is rejected with [`MathError::Overflow`].
//! Arithmetic operators do not check for integer overflow beyond what the
//! integer type itself does.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{reject, MathError, Result};
use crate::scalar::{negative_gcd, Integer};

/// `numerator / denominator` in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "(T, T)",
        into = "(T, T)",
        bound(
            serialize = "T: Integer + serde::Serialize",
            deserialize = "T: Integer + serde::Deserialize<'de>"
        )
    )
)]
pub struct Rational<T> {
    num: T,
    den: T,
}

impl<T: Integer> Rational<T> {
    /// Creates `numerator / denominator` reduced to lowest terms.
    ///
    /// Fails with [`MathError::ZeroDenominator`] when `denominator` is zero
    /// and with [`MathError::Overflow`] when the canonical denominator or
    /// numerator is `-MIN` (e.g. `1 / MIN`, `MIN / -1`).
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator == T::zero() {
            return Err(reject(MathError::ZeroDenominator));
        }
        Self::reduced(numerator, denominator)
    }

    /// Creates `n / 1`.
    pub fn from_integer(n: T) -> Self {
        Self {
            num: n,
            den: T::one(),
        }
    }

    /// `denominator` must be non-zero.
    fn reduced(numerator: T, denominator: T) -> Result<Self> {
        if denominator > T::zero() {
            return Ok(Self::reduced_positive(numerator, denominator));
        }
        // Dividing by the negated gcd flips both signs in one step; it only
        // overflows for `MIN / -1`.
        let g = negative_gcd(numerator, denominator);
        match (numerator.checked_div(g), denominator.checked_div(g)) {
            (Some(num), Some(den)) => Ok(Self { num, den }),
            _ => Err(reject(MathError::Overflow)),
        }
    }

    /// `denominator` must be positive.
    fn reduced_positive(numerator: T, denominator: T) -> Self {
        // The gcd is at most `denominator`, so negating it cannot overflow.
        let g = -negative_gcd(numerator, denominator);
        Self {
            num: numerator / g,
            den: denominator / g,
        }
    }

    /// Numerator; carries the sign.
    pub fn numerator(&self) -> T {
        self.num
    }

    /// Denominator; always positive.
    pub fn denominator(&self) -> T {
        self.den
    }

    /// Replaces both terms; the value is untouched on error.
    pub fn set(&mut self, numerator: T, denominator: T) -> Result<()> {
        *self = Self::new(numerator, denominator)?;
        Ok(())
    }

    /// Replaces the numerator, keeping the current denominator, then reduces.
    pub fn set_numerator(&mut self, numerator: T) {
        *self = Self::reduced_positive(numerator, self.den);
    }

    /// Replaces the denominator, keeping the current numerator, then reduces.
    pub fn set_denominator(&mut self, denominator: T) -> Result<()> {
        self.set(self.num, denominator)
    }

    /// Returns `true` for `0/1`.
    pub fn is_zero(&self) -> bool {
        self.num == T::zero()
    }

    /// `1 / self`; fails with [`MathError::DivisionByZero`] for zero and
    /// with [`MathError::Overflow`] for `MIN / d`.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(reject(MathError::DivisionByZero));
        }
        Self::reduced(self.den, self.num)
    }

    /// Quotient `self / rhs`; fails with [`MathError::DivisionByZero`] when
    /// `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.recip()?)
    }

    /// In-place form of [`Rational::checked_div`].
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.num.to_f64() / self.den.to_f64()
    }

    /// Nearest `f32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl<T: Integer> Default for Rational<T> {
    fn default() -> Self {
        Self::from_integer(T::zero())
    }
}

impl<T: Integer> From<T> for Rational<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: Integer> TryFrom<(T, T)> for Rational<T> {
    type Error = MathError;
    fn try_from((numerator, denominator): (T, T)) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl<T: Integer> From<Rational<T>> for (T, T) {
    fn from(value: Rational<T>) -> Self {
        (value.num, value.den)
    }
}

impl<T: Integer> Add for Rational<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        // Scale by lcm(den, rhs.den) instead of the raw product to delay overflow.
        let g = self.den.gcd(rhs.den);
        let num = self.num * (rhs.den / g) + rhs.num * (self.den / g);
        Self::reduced_positive(num, (self.den / g) * rhs.den)
    }
}

impl<T: Integer> AddAssign for Rational<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Integer> Sub for Rational<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<T: Integer> SubAssign for Rational<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Integer> Neg for Rational<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<T: Integer> Mul for Rational<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Cross-cancel first; both gcds are non-zero because denominators are.
        let g1 = self.num.gcd(rhs.den);
        let g2 = self.den.gcd(rhs.num);
        Self::reduced_positive(
            (self.num / g1) * (rhs.num / g2),
            (self.den / g2) * (rhs.den / g1),
        )
    }
}

impl<T: Integer> MulAssign for Rational<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Integer> Div for Rational<T> {
    type Output = Result<Self>;
    fn div(self, rhs: Self) -> Result<Self> {
        self.checked_div(rhs)
    }
}

impl<T: Integer> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Floor quotient and non-negative remainder; `den` must be positive.
fn floor_div_rem<T: Integer>(num: T, den: T) -> (T, T) {
    let (q, r) = (num / den, num % den);
    // `r < 0` implies `den >= 2`, so `q > MIN` and `q - 1` fits.
    if r < T::zero() {
        (q - T::one(), r + den)
    } else {
        (q, r)
    }
}

/// Orders `a/b` against `c/d` (`b, d > 0`) by their continued-fraction
/// expansions, so no cross products are formed.
fn cmp_fractions<T: Integer>(mut a: T, mut b: T, mut c: T, mut d: T) -> Ordering {
    let zero = T::zero();
    loop {
        let (q1, r1) = floor_div_rem(a, b);
        let (q2, r2) = floor_div_rem(c, d);
        if q1 != q2 {
            return q1.cmp(&q2);
        }
        match (r1 == zero, r2 == zero) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // r1/b < r2/d  iff  d/r2 < b/r1
            (false, false) => (a, b, c, d) = (d, r2, b, r1),
        }
    }
}

impl<T: Integer> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_fractions(self.num, self.den, other.num, other.den)
    }
}

impl<T: Integer> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
