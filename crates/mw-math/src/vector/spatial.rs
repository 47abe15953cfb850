// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 3D-only operations.

use super::Vector;
use crate::scalar::Scalar;

impl<T: Scalar> Vector<T, 3> {
    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::xyz(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::xyz(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along +Z.
    pub fn unit_z() -> Self {
        Self::xyz(T::zero(), T::zero(), T::one())
    }

    /// Cross product `self × other` (right-handed). Anti-commutative.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::xyz(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}
