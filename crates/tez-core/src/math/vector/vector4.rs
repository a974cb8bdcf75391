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

/// A 4-dimensional vector, often used for homogeneous coordinates.
///
/// Points carry `w = 1` and directions `w = 0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector4<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component, used for homogeneous coordinates.
    pub w: T,
}

impl<T> Vector4<T> {
    /// Creates a new `Vector4` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Vector4<T> {
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// The unit vector pointing along the positive W-axis.
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a `Vector4` from a `Vector3` and a `w` component.
    #[inline]
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Returns the `[x, y, z]` components as a `Vector3`, discarding `w`.
    #[inline]
    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl_vector!(Vector4 { x, y, z, w }, 4);
impl_scalar_lhs_mul!(Vector4 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// --- Common Types ---

/// `Vector4` of [`Int8`].
pub type Vector4i8 = Vector4<Int8>;
/// `Vector4` of [`Int16`].
pub type Vector4i16 = Vector4<Int16>;
/// `Vector4` of [`Int32`].
pub type Vector4i32 = Vector4<Int32>;
/// `Vector4` of [`Int64`].
pub type Vector4i64 = Vector4<Int64>;
/// `Vector4` of [`UInt8`].
pub type Vector4u8 = Vector4<UInt8>;
/// `Vector4` of [`UInt16`].
pub type Vector4u16 = Vector4<UInt16>;
/// `Vector4` of [`UInt32`].
pub type Vector4u32 = Vector4<UInt32>;
/// `Vector4` of [`UInt64`].
pub type Vector4u64 = Vector4<UInt64>;
/// `Vector4` of [`Float32`].
pub type Vector4f32 = Vector4<Float32>;
/// `Vector4` of [`Float64`].
pub type Vector4f64 = Vector4<Float64>;
