// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Generic numeric primitives.

This crate provides:
- Fixed-dimension vectors (`Vector<T, N>`) with 2D/3D/4D aliases.
- Axis-aligned bounds (`Bounds<T, N>`).
- Planes described by a unit normal and a signed offset (`Plane<T, N>`).
- Complex (`Complex<T>`) and exact rational (`Rational<T>`) numbers.
- Interpolation helpers usable on scalars and vectors.

Design notes:
- Every type is a plain `Copy` value; mutators have pure counterparts that
  return a modified copy.
- Fallible operations return [`MathError`] and validate before writing, so a
  rejected call leaves the receiver untouched.
- Degenerate input (null vectors, zero divisors) is rejected instead of
  producing `NaN` or infinities.
"]

/// Axis-aligned bounds.
pub mod bounds;
/// Complex numbers.
pub mod complex;
/// Error taxonomy shared by every module.
pub mod error;
/// Interpolation between control points.
pub mod interpolation;
/// Planes in 2D and 3D space.
pub mod plane;
/// Exact fractions over integer types.
pub mod rational;
/// Numeric traits the generic types are written against.
pub mod scalar;
/// Approximate-comparison policy.
pub mod tolerance;
/// Fixed-dimension vectors.
pub mod vector;

pub use bounds::{Bounds, Bounds2, Bounds3};
pub use complex::Complex;
pub use error::{MathError, Result};
pub use plane::{Plane, Plane2, Plane3};
pub use rational::Rational;
pub use scalar::{Integer, Scalar};
pub use tolerance::Tolerance;
pub use vector::{Vector, Vector2, Vector3, Vector4};
