// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Complex numbers in Cartesian form.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{reject, MathError, Result};
use crate::scalar::Scalar;

/// `re + im·i`. Equality is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T> {
    re: T,
    im: T,
}

impl<T: Scalar> Complex<T> {
    /// Creates a complex number from its Cartesian parts.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Creates a complex number from its modulus and argument (radians).
    pub fn from_polar(modulus: T, argument: T) -> Self {
        let (sin, cos) = argument.sin_cos();
        Self::new(modulus * cos, modulus * sin)
    }

    /// Real part.
    pub fn real(&self) -> T {
        self.re
    }

    /// Imaginary part.
    pub fn imaginary(&self) -> T {
        self.im
    }

    /// Replaces both parts.
    pub fn set(&mut self, re: T, im: T) {
        self.re = re;
        self.im = im;
    }

    /// Replaces the real part.
    pub fn set_real(&mut self, re: T) {
        self.re = re;
    }

    /// Replaces the imaginary part.
    pub fn set_imaginary(&mut self, im: T) {
        self.im = im;
    }

    /// Radial coordinate `|z|`.
    pub fn modulus(&self) -> T {
        self.re.hypot(self.im)
    }

    /// Angular coordinate in `(-π, π]`; zero for the origin.
    pub fn argument(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Complex conjugate.
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Quotient `self / rhs`; fails with [`MathError::DivisionByZero`] when
    /// both parts of `rhs` are zero.
    ///
    /// Smith's algorithm: the divisor is scaled by its larger part, so no
    /// squared magnitude is ever formed.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        let zero = T::zero();
        if rhs.re == zero && rhs.im == zero {
            return Err(reject(MathError::DivisionByZero));
        }
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Ok(Self::new((a + b * r) / den, (b - a * r) / den))
        } else {
            let r = c / d;
            let den = c * r + d;
            Ok(Self::new((a * r + b) / den, (b * r - a) / den))
        }
    }

    /// In-place form of [`Complex::checked_div`].
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }
}

impl<T: Scalar> Default for Complex<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Scalar> Div for Complex<T> {
    type Output = Result<Self>;
    fn div(self, rhs: Self) -> Result<Self> {
        self.checked_div(rhs)
    }
}

impl<T: Scalar> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

impl<T: Scalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::zero();
        f.write_str("Complex[")?;
        if self.re != zero {
            write!(f, "{}", self.re)?;
            if self.im != zero {
                write!(f, " + {} i", self.im)?;
            }
        } else if self.im != zero {
            write!(f, "{} i", self.im)?;
        } else {
            write!(f, "{}", self.re)?;
        }
        f.write_str("]")
    }
}
