// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named component accessors for 2-, 3- and 4-dimensional vectors.

use super::Vector;

macro_rules! named_components {
    ($n:literal: $($get:ident / $set:ident => $idx:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Returns the `", stringify!($get), "` component.")]
                pub fn $get(&self) -> T {
                    self.data[$idx]
                }

                #[doc = concat!("Replaces the `", stringify!($get), "` component.")]
                pub fn $set(&mut self, value: T) {
                    self.data[$idx] = value;
                }
            )+
        }
    };
}

named_components!(2: x / set_x => 0, y / set_y => 1);
named_components!(3: x / set_x => 0, y / set_y => 1, z / set_z => 2);
named_components!(4: x / set_x => 0, y / set_y => 1, z / set_z => 2, w / set_w => 3);

impl<T> Vector<T, 2> {
    /// Creates a 2D vector.
    pub const fn xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }
}

impl<T> Vector<T, 3> {
    /// Creates a 3D vector.
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }
}

impl<T> Vector<T, 4> {
    /// Creates a 4D vector.
    pub const fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self::new([x, y, z, w])
    }
}
