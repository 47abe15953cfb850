// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric abstractions the generic math types are written against.
//!
//! Two families are covered:
//! - [`Scalar`]: floating-point component types for vectors, bounds, planes
//!   and complex numbers. Implemented for `f32` and `f64`.
//! - [`Integer`]: signed integer types backing [`crate::Rational`].
//!   Implemented for `i8` through `i128` and `isize`.
//!
//! Arithmetic operators are required through the standard operator traits so
//! generic code can use `+`, `-`, `*`, `/` and unary `-` directly.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Floating-point scalar with the transcendentals used by the geometry types.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Machine epsilon of the type; the default equality tolerance.
    const EPSILON: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// `sqrt(self² + other²)` without intermediate overflow or underflow.
    fn hypot(self, other: Self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ident),*) => {$(
        impl Scalar for $t {
            const EPSILON: Self = $t::EPSILON;
            const PI: Self = core::$t::consts::PI;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn abs(self) -> Self {
                $t::abs(self)
            }

            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            fn hypot(self, other: Self) -> Self {
                $t::hypot(self, other)
            }

            fn sin(self) -> Self {
                $t::sin(self)
            }

            fn cos(self) -> Self {
                $t::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }

            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

impl_scalar!(f32, f64);

/// Signed integer usable as the numerator/denominator of a rational.
pub trait Integer:
    Copy
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Returns zero.
    fn zero() -> Self;

    /// Returns one.
    fn one() -> Self;

    /// Lossy conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Division returning `None` on a zero divisor or when the quotient is
    /// not representable (`MIN / -1`).
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Greatest common divisor of the absolute values; `gcd(0, 0) == 0`.
    ///
    /// The only unrepresentable result is `-MIN`, from `gcd(MIN, MIN)` or
    /// `gcd(MIN, 0)`.
    fn gcd(self, other: Self) -> Self {
        -negative_gcd(self, other)
    }
}

/// `-gcd(a, b)`, computed entirely on non-positive values so that `MIN` is a
/// valid input. Zero only when both inputs are zero.
pub(crate) fn negative_gcd<T: Integer>(a: T, b: T) -> T {
    let zero = T::zero();
    let mut a = if a > zero { -a } else { a };
    let mut b = if b > zero { -b } else { b };
    // `%` keeps the dividend's sign, so both stay non-positive.
    while b != zero {
        // Also avoids `MIN % -1`, which overflows.
        if b == -T::one() {
            return b;
        }
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div(self, rhs)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_ignores_sign() {
        assert_eq!(12_i32.gcd(-18), 6);
        assert_eq!((-12_i64).gcd(-18), 6);
        assert_eq!(0_i32.gcd(5), 5);
        assert_eq!(7_i32.gcd(0), 7);
        assert_eq!(0_i32.gcd(0), 0);
    }

    #[test]
    fn negative_gcd_accepts_min() {
        assert_eq!(negative_gcd(i32::MIN, 6), -2);
        assert_eq!(negative_gcd(0, i32::MIN), i32::MIN);
        assert_eq!(negative_gcd(i64::MIN, i64::MIN), i64::MIN);
        assert_eq!(i8::MIN.gcd(-96), 32);
        assert_eq!(negative_gcd(i16::MIN, -1), -1);
    }

    #[test]
    fn float_constants() {
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as Scalar>::PI, std::f64::consts::PI);
        assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5_f32);
    }
}
