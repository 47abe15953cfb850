// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-dimension vectors.
//!
//! [`Vector<T, N>`] stores exactly `N` components of a floating-point
//! [`Scalar`]. Dimension-specific helpers (named components, 2D rotation and
//! normals, the 3D cross product) are inherent impls on the matching
//! instantiation, so calling them on another dimension is a type error.
//!
//! Equality is approximate: two components match when their difference is at
//! most `T::EPSILON`. Use [`Vector::approx_eq`] with a [`Tolerance`] for
//! anything that is not near unit magnitude.

use core::array;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{reject, MathError, Result};
use crate::scalar::Scalar;
use crate::tolerance::Tolerance;

mod components;
mod planar;
#[cfg(feature = "serde")]
mod serde_impl;
mod spatial;

/// Two-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// Three-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// Four-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

/// Ordered tuple of `N` scalar components.
///
/// `N` must be strictly positive; `Vector<T, 0>` fails to compile as soon as
/// it is constructed.
#[derive(Debug, Clone, Copy)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    pub const fn new(data: [T; N]) -> Self {
        const { assert!(N > 0, "vector dimension must be strictly positive") };
        Self { data }
    }

    /// Number of components.
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Borrows the components.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.data.get(index).copied().ok_or_else(|| {
            reject(MathError::OutOfRange {
                index,
                dimension: N,
            })
        })
    }

    /// Replaces the component at `index`; the vector is untouched on error.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self.data.get_mut(index).ok_or_else(|| {
            reject(MathError::OutOfRange {
                index,
                dimension: N,
            })
        })?;
        *slot = value;
        Ok(())
    }

    fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self::new(self.data.map(f))
    }

    pub(crate) fn zip_with(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::new(array::from_fn(|i| f(self.data[i], other.data[i])))
    }

    pub(crate) fn all_pairs(&self, other: &Self, mut pred: impl FnMut(T, T) -> bool) -> bool {
        self.data.iter().zip(&other.data).all(|(&a, &b)| pred(a, b))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The null vector.
    pub fn zero() -> Self {
        Self::new([T::zero(); N])
    }

    /// Returns `true` if every component is exactly zero.
    pub fn is_null(&self) -> bool {
        self.data.iter().all(|&c| c == T::zero())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean norm.
    ///
    /// Overflows to infinity (or underflows to zero) far sooner than
    /// [`Vector::length`]; prefer the latter for magnitude checks.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm, accumulated with `hypot` so no intermediate square
    /// leaves the representable range.
    pub fn length(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &c| acc.hypot(c))
    }

    /// Largest absolute component.
    fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &c| {
            let c = c.abs();
            if c > acc {
                c
            } else {
                acc
            }
        })
    }

    /// The vector divided by its largest absolute component. Every component
    /// of the result lies in `[-1, 1]` and at least one has magnitude 1.
    fn rescaled(&self) -> Result<Self> {
        if self.is_null() {
            return Err(reject(MathError::NullVector));
        }
        let scale = self.max_abs();
        Ok(self.map(|c| c / scale))
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Fails with [`MathError::NullVector`] when every component is zero.
    pub fn normalized(&self) -> Result<Self> {
        let unit = self.rescaled()?;
        let len = unit.length();
        Ok(unit.map(|c| c / len))
    }

    /// Normalizes in place; the vector is untouched on error.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Vector projection of `self` onto `other`: `(self·other / |other|²) * other`.
    ///
    /// Fails with [`MathError::NullVector`] when `other` is null.
    pub fn projection(&self, other: &Self) -> Result<Self> {
        // Invariant under scaling `other`; the rescaled axis has squared length in [1, N].
        let axis = other.rescaled()?;
        Ok(axis * (self.dot(&axis) / axis.length_squared()))
    }

    /// Projects `self` onto `other` in place; the vector is untouched on error.
    pub fn project(&mut self, other: &Self) -> Result<()> {
        *self = self.projection(other)?;
        Ok(())
    }

    /// Signed length of the projection of `self` onto `other`.
    pub fn scalar_projection(&self, other: &Self) -> Result<T> {
        Ok(self.dot(&other.normalized()?))
    }

    /// Divides every component by `divisor`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `divisor` is exactly zero.
    pub fn checked_div(self, divisor: T) -> Result<Self> {
        if divisor == T::zero() {
            return Err(reject(MathError::DivisionByZero));
        }
        Ok(self.map(|c| c / divisor))
    }

    /// In-place form of [`Vector::checked_div`].
    pub fn try_div_assign(&mut self, divisor: T) -> Result<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.all_pairs(other, |a, b| tolerance.within(a, b))
    }

    /// Converts every component to another scalar type.
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        Vector::new(self.data.map(|c| U::from_f64(c.to_f64())))
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| (a - b).abs() <= T::EPSILON)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Scalar division is checked; `v / 0.0` is an error, not a vector of infinities.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Result<Self>;
    fn div(self, rhs: T) -> Result<Self> {
        self.checked_div(rhs)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{N}>[")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
