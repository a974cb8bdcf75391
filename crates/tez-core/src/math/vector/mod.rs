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

//! Provides 2D, 3D, and 4D vector types and their associated operations.
//!
//! The three types share their arithmetic through [`impl_vector!`]; the
//! dimension-specific operations (perpendicular, cross product, homogeneous
//! conversions) live next to each type.

/// Implements the operations common to every vector dimension.
macro_rules! impl_vector {
    ($Vector:ident { $($field:ident),+ }, $len:literal) => {
        impl<T: Scalar> $Vector<T> {
            /// A vector with all components set to zero.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };
            /// A vector with all components set to one.
            pub const ONE: Self = Self { $($field: T::ONE),+ };

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Calculates the dot product of this vector and another.
            #[inline]
            pub fn dot(&self, rhs: Self) -> T {
                T::ZERO $(+ self.$field * rhs.$field)+
            }

            /// Calculates the squared length (magnitude) of the vector.
            /// This is faster than `length()` as it avoids a square root.
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(*self)
            }

            /// Divides every component by `rhs`, or returns `None` if `rhs` is zero.
            #[inline]
            pub fn checked_div(self, rhs: T) -> Option<Self> {
                (rhs != T::ZERO).then(|| self / rhs)
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> $Vector<U> {
                $Vector { $($field: f(self.$field)),+ }
            }

            /// Converts every component losslessly into `U`.
            #[inline]
            pub fn cast<U: From<T>>(self) -> $Vector<U> {
                self.map(U::from)
            }

            /// Returns the components as an array.
            #[inline]
            pub fn to_array(self) -> [T; $len] {
                [$(self.$field),+]
            }
        }

        impl<T: Float> $Vector<T> {
            /// Calculates the length (magnitude) of the vector.
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Returns a vector with the same direction and a length of 1.
            /// If the vector's length is near zero, it returns `ZERO`.
            #[inline]
            pub fn normalized(&self) -> Self {
                let len_sq = self.length_squared();
                if len_sq > T::EPSILON * T::EPSILON {
                    *self / len_sq.sqrt()
                } else {
                    Self::ZERO
                }
            }

            /// Calculates the distance between this vector and another.
            #[inline]
            pub fn distance(&self, other: Self) -> T {
                (*self - other).length()
            }

            /// Returns a new vector with the absolute value of each component.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(Float::abs)
            }

            /// Performs a linear interpolation between two vectors.
            #[inline]
            pub fn lerp(start: Self, end: Self, t: T) -> Self {
                start + (end - start) * t
            }
        }

        // --- Operator Overloads ---

        impl<T: Scalar + Neg<Output = T>> Neg for $Vector<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> Add for $Vector<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> Sub for $Vector<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul for $Vector<T> {
            type Output = Self;
            /// Multiplies two vectors component-wise.
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $Vector<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Scalar> Div<T> for $Vector<T> {
            type Output = Self;
            /// Divides the vector by a scalar.
            ///
            /// Dividing by zero is a debug assertion; see
            /// [`checked_div`](Self::checked_div).
            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                debug_assert!(rhs != T::ZERO, "Division by zero");
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Scalar> AddAssign for $Vector<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Scalar> SubAssign for $Vector<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Scalar> MulAssign<T> for $Vector<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }

        impl<T: Scalar> DivAssign<T> for $Vector<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                debug_assert!(rhs != T::ZERO, "Division by zero");
                $(self.$field /= rhs;)+
            }
        }

        impl<T> Index<usize> for $Vector<T> {
            type Output = T;
            /// # Panics
            /// Panics if `index` is not a valid component index.
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match [$(&self.$field),+].into_iter().nth(index) {
                    Some(component) => component,
                    None => panic!(concat!("Index out of bounds for ", stringify!($Vector))),
                }
            }
        }

        impl<T> IndexMut<usize> for $Vector<T> {
            /// # Panics
            /// Panics if `index` is not a valid component index.
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match [$(&mut self.$field),+].into_iter().nth(index) {
                    Some(component) => component,
                    None => panic!(concat!("Index out of bounds for ", stringify!($Vector))),
                }
            }
        }

        impl<T> From<[T; $len]> for $Vector<T> {
            #[inline]
            fn from([$($field),+]: [T; $len]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$Vector<T>> for [T; $len] {
            #[inline]
            fn from(vector: $Vector<T>) -> Self {
                [$(vector.$field),+]
            }
        }

        impl<T: fmt::Display> fmt::Display for $Vector<T> {
            /// Formats as `[x, y, ...]`, applying the format spec to each component.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, component) in [$(&self.$field),+].into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(component, f)?;
                }
                f.write_str("]")
            }
        }

        // SAFETY: `#[repr(C)]` with only `T` fields leaves no padding, so the
        // vector is zeroable/plain-old-data exactly when `T` is.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $Vector<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $Vector<T> {}

        impl<T: AbsDiffEq> AbsDiffEq for $Vector<T>
        where
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T: RelativeEq> RelativeEq for $Vector<T>
        where
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

/// Implements `scalar * vector` for the primitive component types.
macro_rules! impl_scalar_lhs_mul {
    ($Vector:ident => $($ty:ty),*) => {
        $(
            impl Mul<$Vector<$ty>> for $ty {
                type Output = $Vector<$ty>;
                #[inline]
                fn mul(self, rhs: $Vector<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

mod vector2;
mod vector3;
mod vector4;

pub use self::vector2::*;
pub use self::vector3::*;
pub use self::vector4::*;
