// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Vector3;
use crate::math::{Float, Scalar};
use crate::types::{Float32, Float64, Int16, Int32, Int64, Int8, UInt16, UInt32, UInt64, UInt8};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 2-dimensional vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector2<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

impl<T> Vector2<T> {
    /// Creates a new `Vector2` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(T::ONE, T::ZERO);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(T::ZERO, T::ONE);

    /// Returns the z component of the 3D cross product of the two vectors
    /// lifted into the XY plane (the signed parallelogram area).
    #[inline]
    pub fn cross(&self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Creates a `Vector3` from this vector and a `z` component.
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar + Neg<Output = T>> Vector2<T> {
    /// Returns the vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl_vector!(Vector2 { x, y }, 2);
impl_scalar_lhs_mul!(Vector2 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// --- Common Types ---

/// `Vector2` of [`Int8`].
pub type Vector2i8 = Vector2<Int8>;
/// `Vector2` of [`Int16`].
pub type Vector2i16 = Vector2<Int16>;
/// `Vector2` of [`Int32`].
pub type Vector2i32 = Vector2<Int32>;
/// `Vector2` of [`Int64`].
pub type Vector2i64 = Vector2<Int64>;
/// `Vector2` of [`UInt8`].
pub type Vector2u8 = Vector2<UInt8>;
/// `Vector2` of [`UInt16`].
pub type Vector2u16 = Vector2<UInt16>;
/// `Vector2` of [`UInt32`].
pub type Vector2u32 = Vector2<UInt32>;
/// `Vector2` of [`UInt64`].
pub type Vector2u64 = Vector2<UInt64>;
/// `Vector2` of [`Float32`].
pub type Vector2f32 = Vector2<Float32>;
/// `Vector2` of [`Float64`].
pub type Vector2f64 = Vector2<Float64>;

/// Default signed integer 2D vector.
pub type Vector2i = Vector2i32;
/// Default unsigned integer 2D vector.
pub type Vector2u = Vector2u32;
/// Default floating-point 2D vector.
pub type Vector2f = Vector2f32;
