// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Planes (lines in 2D) in Hessian normal form.

use core::fmt;

use crate::error::Result;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// A line in the plane.
pub type Plane2<T> = Plane<T, 2>;
/// A plane in space.
pub type Plane3<T> = Plane<T, 3>;

/// Set of points `p` with `p · normal == distance`.
///
/// Invariants:
/// - `normal` has unit length.
/// - `distance` is signed: negative when the origin lies on the positive side.
#[derive(Debug, Clone, Copy)]
pub struct Plane<T, const N: usize> {
    normal: Vector<T, N>,
    distance: T,
}

impl<T: Scalar, const N: usize> Plane<T, N> {
    /// Builds the plane orthogonal to `normal` passing through `point`.
    ///
    /// Fails with [`crate::MathError::NullVector`] when `normal` is null.
    pub fn new(normal: Vector<T, N>, point: Vector<T, N>) -> Result<Self> {
        let normal = normal.normalized()?;
        Ok(Self {
            normal,
            distance: point.dot(&normal),
        })
    }

    /// Redefines the plane; it is untouched on error.
    pub fn set(&mut self, normal: Vector<T, N>, point: Vector<T, N>) -> Result<()> {
        *self = Self::new(normal, point)?;
        Ok(())
    }

    /// Unit normal.
    pub fn normal(&self) -> Vector<T, N> {
        self.normal
    }

    /// Signed distance from the origin along the normal.
    pub fn distance_from_origin(&self) -> T {
        self.distance
    }

    /// Signed offset of `point` from the plane along the normal.
    pub fn signed_distance(&self, point: &Vector<T, N>) -> T {
        point.dot(&self.normal) - self.distance
    }

    /// Returns `true` if `point` lies on the plane (within machine epsilon).
    pub fn is_on(&self, point: &Vector<T, N>) -> bool {
        self.signed_distance(point).abs() <= T::EPSILON
    }

    /// Returns `true` if `point` lies on the side the normal points to.
    pub fn is_over(&self, point: &Vector<T, N>) -> bool {
        self.signed_distance(point) > T::EPSILON
    }

    /// Returns `true` if `point` lies on the side opposite to the normal.
    pub fn is_under(&self, point: &Vector<T, N>) -> bool {
        self.signed_distance(point) < -T::EPSILON
    }

    /// Unsigned distance between `point` and the plane.
    pub fn distance(&self, point: &Vector<T, N>) -> T {
        self.signed_distance(point).abs()
    }

    /// Closest point on the plane to `point`.
    pub fn projection(&self, point: &Vector<T, N>) -> Vector<T, N> {
        *point - self.normal * self.signed_distance(point)
    }
}

impl<T: Scalar, const N: usize> PartialEq for Plane<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && (self.distance - other.distance).abs() <= T::EPSILON
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Plane<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane<{N}>[{}, {}]", self.normal, self.distance)
    }
}
