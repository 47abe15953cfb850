// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 2D-only operations: perpendiculars and rotation.

use super::Vector;
use crate::scalar::Scalar;

impl<T: Scalar> Vector<T, 2> {
    /// Perpendicular `(y, -x)`, i.e. the input rotated a quarter turn clockwise.
    pub fn left_hand_normal(&self) -> Self {
        Self::xy(self.y(), -self.x())
    }

    /// Perpendicular `(-y, x)`, i.e. the input rotated a quarter turn counter-clockwise.
    pub fn right_hand_normal(&self) -> Self {
        Self::xy(-self.y(), self.x())
    }

    /// Returns the vector rotated counter-clockwise by `angle` radians.
    pub fn rotated(&self, angle: T) -> Self {
        if angle == T::zero() {
            return *self;
        }
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x(), self.y());
        Self::xy(cos * x - sin * y, sin * x + cos * y)
    }

    /// Rotates in place by `angle` radians; zero is a no-op.
    pub fn rotate(&mut self, angle: T) {
        *self = self.rotated(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_returns_input_bit_for_bit() {
        let v = Vector::xy(0.1_f32, 0.7);
        assert_eq!(v.rotated(0.0).to_array(), [0.1, 0.7]);
    }

    #[test]
    fn normals_are_perpendicular_and_opposite() {
        let v = Vector::xy(3.0_f64, -2.0);
        assert_eq!(v.dot(&v.left_hand_normal()), 0.0);
        assert_eq!(v.dot(&v.right_hand_normal()), 0.0);
        assert_eq!(v.left_hand_normal(), -v.right_hand_normal());
    }
}
