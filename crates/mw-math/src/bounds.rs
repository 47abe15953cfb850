// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Axis-aligned bounds over [`Vector`] corners.
//!
//! Invariants:
//! - A bounds is *empty* when, on any axis, the upper limit is less than or
//!   equal to the lower limit. Empty is a regular state, not an error: it is
//!   what a non-overlapping intersection produces.
//! - Containment tests are inclusive on faces.

use core::fmt;

use crate::error::{reject, MathError, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Two-dimensional bounds (a rectangle).
pub type Bounds2<T> = Bounds<T, 2>;
/// Three-dimensional bounds (a box).
pub type Bounds3<T> = Bounds<T, 3>;

/// Axis-aligned box described by an upper and a lower corner.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T, const N: usize> {
    upper: Vector<T, N>,
    lower: Vector<T, N>,
}

fn max<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

fn min<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

impl<T: Scalar, const N: usize> Bounds<T, N> {
    /// Builds the bounds spanned by two arbitrary corners.
    ///
    /// If the corners share a coordinate on any axis the result is empty.
    pub fn new(first: Vector<T, N>, second: Vector<T, N>) -> Self {
        Self {
            upper: first.zip_with(second, max),
            lower: first.zip_with(second, min),
        }
    }

    /// Smallest bounds covering every point.
    ///
    /// A single point (or identical points) yields an empty, degenerate
    /// bounds located at that point. Fails with [`MathError::EmptyInput`]
    /// when `points` yields nothing.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vector<T, N>>,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or_else(|| reject(MathError::EmptyInput))?;
        let mut bounds = Self {
            upper: first,
            lower: first,
        };
        for point in points {
            bounds.include_point(&point);
        }
        Ok(bounds)
    }

    /// Resets the bounds to the box spanned by two corners.
    pub fn set(&mut self, first: Vector<T, N>, second: Vector<T, N>) {
        *self = Self::new(first, second);
    }

    /// Upper corner.
    pub fn upper_limit(&self) -> Vector<T, N> {
        self.upper
    }

    /// Lower corner.
    pub fn lower_limit(&self) -> Vector<T, N> {
        self.lower
    }

    /// Replaces the upper corner as-is; the bounds may become empty.
    pub fn set_upper_limit(&mut self, upper: Vector<T, N>) {
        self.upper = upper;
    }

    /// Replaces the lower corner as-is; the bounds may become empty.
    pub fn set_lower_limit(&mut self, lower: Vector<T, N>) {
        self.lower = lower;
    }

    /// Returns `true` if the bounds has no interior on at least one axis.
    pub fn is_empty(&self) -> bool {
        !self.upper.all_pairs(&self.lower, |u, l| u > l)
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vector<T, N> {
        (self.upper + self.lower) * T::from_f64(0.5)
    }

    /// Per-axis extent `upper - lower`; non-positive on the axes that make
    /// the bounds empty.
    pub fn size(&self) -> Vector<T, N> {
        self.upper - self.lower
    }

    /// Grows the bounds so that it covers `point`. Never shrinks.
    pub fn include_point(&mut self, point: &Vector<T, N>) {
        self.upper = self.upper.zip_with(*point, max);
        self.lower = self.lower.zip_with(*point, min);
    }

    /// Copy of the bounds grown to cover `point`.
    pub fn with_point(&self, point: &Vector<T, N>) -> Self {
        let mut grown = *self;
        grown.include_point(point);
        grown
    }

    /// Grows the bounds to the union with `other`.
    pub fn include_bounds(&mut self, other: &Self) {
        self.include_point(&other.upper);
        self.include_point(&other.lower);
    }

    /// Union of the two bounds.
    pub fn with_bounds(&self, other: &Self) -> Self {
        let mut grown = *self;
        grown.include_bounds(other);
        grown
    }

    /// Shrinks the bounds to its overlap with `other`; empty if they are disjoint.
    pub fn intersect(&mut self, other: &Self) {
        self.upper = self.upper.zip_with(other.upper, min);
        self.lower = self.lower.zip_with(other.lower, max);
    }

    /// Overlap of the two bounds; empty if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut overlap = *self;
        overlap.intersect(other);
        overlap
    }

    /// Inclusive point containment.
    pub fn has_point_inside(&self, point: &Vector<T, N>) -> bool {
        point.all_pairs(&self.upper, |p, u| p <= u) && point.all_pairs(&self.lower, |p, l| p >= l)
    }

    /// Inclusive containment of `other` on every axis.
    pub fn has_bounds_inside(&self, other: &Self) -> bool {
        self.has_point_inside(&other.upper) && self.has_point_inside(&other.lower)
    }

    /// Returns `true` if the overlap with `other` is non-empty.
    ///
    /// Boxes that only touch on a face have an empty (flat) overlap and do
    /// not count as intersecting.
    pub fn is_intersecting(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }
}

/// Both corners at the origin: an empty bounds.
impl<T: Scalar, const N: usize> Default for Bounds<T, N> {
    fn default() -> Self {
        Self {
            upper: Vector::zero(),
            lower: Vector::zero(),
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Bounds<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.upper == other.upper && self.lower == other.lower
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Bounds<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds<{N}>[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_at_origin() {
        let b = Bounds2::<f32>::default();
        assert!(b.is_empty());
        assert_eq!(b.upper_limit(), Vector::xy(0.0, 0.0));
        assert_eq!(b.lower_limit(), Vector::xy(0.0, 0.0));
    }

    #[test]
    fn raw_setters_can_empty_and_refill() {
        let mut b = Bounds2::<f64>::default();
        b.set_upper_limit(Vector::xy(1.0, 1.0));
        assert!(!b.is_empty());
        b.set_upper_limit(Vector::xy(-1.0, -1.0));
        assert!(b.is_empty());
        b.set_lower_limit(Vector::xy(-2.0, -2.0));
        assert!(!b.is_empty());
        assert_eq!(b.upper_limit(), Vector::xy(-1.0, -1.0));
        assert_eq!(b.lower_limit(), Vector::xy(-2.0, -2.0));
    }

    #[test]
    fn from_points_rejects_empty_input() {
        let none: [Vector<f64, 3>; 0] = [];
        assert_eq!(Bounds::from_points(none), Err(MathError::EmptyInput));
    }

    #[test]
    fn display_shows_lower_then_upper() {
        let b = Bounds::new(Vector::xy(1.0_f64, 2.0), Vector::xy(-1.0, 0.0));
        assert_eq!(b.to_string(), "Bounds<2>[Vector<2>[-1, 0], Vector<2>[1, 2]]");
    }
}
