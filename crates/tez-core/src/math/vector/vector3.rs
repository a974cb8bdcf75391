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

use super::{Vector2, Vector4};
use crate::math::{Float, Scalar};
use crate::types::{Float32, Float64, Int16, Int32, Int64, Int8, UInt16, UInt32, UInt64, UInt8};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3-dimensional vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector3<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new `Vector3` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Creates a `Vector4` from this vector and a `w` component.
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Returns the `[x, y]` components as a `Vector2`, discarding `z`.
    #[inline]
    pub fn truncate(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl_vector!(Vector3 { x, y, z }, 3);
impl_scalar_lhs_mul!(Vector3 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// --- Common Types ---

/// `Vector3` of [`Int8`].
pub type Vector3i8 = Vector3<Int8>;
/// `Vector3` of [`Int16`].
pub type Vector3i16 = Vector3<Int16>;
/// `Vector3` of [`Int32`].
pub type Vector3i32 = Vector3<Int32>;
/// `Vector3` of [`Int64`].
pub type Vector3i64 = Vector3<Int64>;
/// `Vector3` of [`UInt8`].
pub type Vector3u8 = Vector3<UInt8>;
/// `Vector3` of [`UInt16`].
pub type Vector3u16 = Vector3<UInt16>;
/// `Vector3` of [`UInt32`].
pub type Vector3u32 = Vector3<UInt32>;
/// `Vector3` of [`UInt64`].
pub type Vector3u64 = Vector3<UInt64>;
/// `Vector3` of [`Float32`].
pub type Vector3f32 = Vector3<Float32>;
/// `Vector3` of [`Float64`].
pub type Vector3f64 = Vector3<Float64>;
