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

//! Provides foundational mathematics primitives for 2D, 3D and 4D.
//!
//! Vectors are generic over their component type. Operations that need a
//! square root (length, normalization, interpolation) are only available for
//! floating-point components.

mod scalar;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::scalar::{Float, Scalar};
pub use self::vector::*;
