// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors returned by fallible math operations.
//!
//! Every variant describes a precondition that was checked before any state
//! was written; callers can retry or propagate without cleanup.

use thiserror::Error;
use tracing::debug;

/// Errors produced by vector, bounds, plane, complex and rational operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Component index is not smaller than the dimension.
    #[error("component index {index} out of range for dimension {dimension}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of components of the vector.
        dimension: usize,
    },
    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Normalization or projection against a vector whose components are all zero.
    #[error("operation is undefined for the null vector")]
    NullVector,
    /// A rational was given a zero denominator.
    #[error("rational denominator must be non-zero")]
    ZeroDenominator,
    /// The exact result does not fit the integer type, e.g. `1 / i32::MIN`
    /// in canonical form.
    #[error("result is not representable in the integer type")]
    Overflow,
    /// An operation that needs at least one element received none.
    #[error("at least one element is required")]
    EmptyInput,
}

/// Convenience alias for results carrying a [`MathError`].
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Records the rejection and hands the error back for propagation.
pub(crate) fn reject(err: MathError) -> MathError {
    debug!(error = %err, "math operation rejected");
    err
}
