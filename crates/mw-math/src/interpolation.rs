// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interpolation between control points.
//!
//! The point type `P` only needs addition, subtraction and multiplication by
//! the parameter type `U`, so the same functions serve scalars, vectors and
//! complex numbers. `mu` runs from `0` (first inner point) to `1` (second
//! inner point); values outside that range extrapolate.

use core::ops::{Add, Mul, Sub};

use crate::scalar::Scalar;

/// Straight-line blend `p1 * (1 - mu) + p2 * mu`.
pub fn linear<P, U>(p1: P, p2: P, mu: U) -> P
where
    P: Add<Output = P> + Mul<U, Output = P>,
    U: Scalar,
{
    p1 * (U::one() - mu) + p2 * mu
}

/// Blend with a half-cosine easing curve; zero slope at both ends.
pub fn cosine<P, U>(p1: P, p2: P, mu: U) -> P
where
    P: Add<Output = P> + Mul<U, Output = P>,
    U: Scalar,
{
    let eased = (U::one() - (mu * U::PI).cos()) / (U::one() + U::one());
    linear(p1, p2, eased)
}

/// Cubic interpolation between `p1` and `p2`, shaped by the outer points
/// `p0` and `p3`.
pub fn cubic<P, U>(p0: P, p1: P, p2: P, p3: P, mu: U) -> P
where
    P: Copy + Add<Output = P> + Sub<Output = P> + Mul<U, Output = P>,
    U: Scalar,
{
    let mu2 = mu * mu;
    let a0 = p3 - p2 - p0 + p1;
    let a1 = p0 - p1 - a0;
    let a2 = p2 - p0;
    a0 * (mu * mu2) + a1 * mu2 + a2 * mu + p1
}

/// Catmull-Rom spline segment between `p1` and `p2`; the curve's tangent at
/// each inner point is parallel to the chord through its neighbours.
pub fn catmull_rom<P, U>(p0: P, p1: P, p2: P, p3: P, mu: U) -> P
where
    P: Copy + Add<Output = P> + Mul<U, Output = P>,
    U: Scalar,
{
    let k = U::from_f64;
    let mu2 = mu * mu;
    let a0 = p0 * k(-0.5) + p1 * k(1.5) + p2 * k(-1.5) + p3 * k(0.5);
    let a1 = p0 * U::one() + p1 * k(-2.5) + p2 * k(2.0) + p3 * k(-0.5);
    let a2 = p0 * k(-0.5) + p2 * k(0.5);
    a0 * (mu * mu2) + a1 * mu2 + a2 * mu + p1
}
