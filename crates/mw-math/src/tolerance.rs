// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Approximate-comparison policy.
//!
//! `==` on the float-backed types compares within machine epsilon, which is
//! only meaningful for values near unit magnitude. Callers comparing results
//! of longer computations pass an explicit [`Tolerance`] instead.

use crate::scalar::Scalar;

/// Absolute and relative bounds for approximate equality.
///
/// Two values `a` and `b` are considered equal when
/// `|a - b| <= absolute` or `|a - b| <= relative * max(|a|, |b|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Absolute bound.
    #[cfg_attr(feature = "serde", serde(default = "Tolerance::default_absolute"))]
    pub absolute: f64,
    /// Bound relative to the larger magnitude of the two operands.
    #[cfg_attr(feature = "serde", serde(default = "Tolerance::default_relative"))]
    pub relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-6
    }

    const fn default_relative() -> f64 {
        1e-6
    }

    /// Creates a tolerance from explicit bounds.
    pub const fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Only bit-identical (or `-0.0 == 0.0`) values compare equal.
    pub const fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Absolute bound equal to the machine epsilon of `T`, no relative bound.
    ///
    /// This is the policy used by `==` on vectors.
    pub fn machine<T: Scalar>() -> Self {
        Self::new(T::EPSILON.to_f64(), 0.0)
    }

    /// Returns `true` if `a` and `b` are equal under this tolerance.
    pub fn within<T: Scalar>(&self, a: T, b: T) -> bool {
        let a = a.to_f64();
        let b = b.to_f64();
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::default_absolute(), Self::default_relative())
    }
}
