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

//! Primitive type aliases and compile-time type identity helpers.
//!
//! The aliases give engine code a fixed-width vocabulary independent of the
//! platform. Type identity is derived from a type's canonical name and hashed
//! with 64-bit FNV-1a, which makes it deterministic within a build but
//! meaningless across builds or compilers.

/// Boolean alias.
pub type Bool = bool;
/// Unicode scalar alias.
pub type Char = char;
/// Raw byte alias.
pub type Byte = u8;

/// Signed 8-bit integer.
pub type Int8 = i8;
/// Signed 16-bit integer.
pub type Int16 = i16;
/// Signed 32-bit integer.
pub type Int32 = i32;
/// Signed 64-bit integer.
pub type Int64 = i64;

/// Unsigned 8-bit integer.
pub type UInt8 = u8;
/// Unsigned 16-bit integer.
pub type UInt16 = u16;
/// Unsigned 32-bit integer.
pub type UInt32 = u32;
/// Unsigned 64-bit integer.
pub type UInt64 = u64;

/// 32-bit IEEE 754 float.
pub type Float32 = f32;
/// 64-bit IEEE 754 float.
pub type Float64 = f64;

/// Exposes the representable range of an integer type as associated constants.
pub trait Limits: Copy {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

macro_rules! impl_limits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Limits for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_limits!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// --- Type Identity ---

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes `bytes` with 64-bit FNV-1a.
///
/// # Examples
///
/// ```
/// use tez_core::types::fnv1a_64;
/// assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
/// assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
/// ```
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Returns the canonical name the compiler gives to `T`.
#[inline]
pub fn name_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Returns a deterministic 64-bit identity for `T`, derived from its name.
///
/// Two distinct types that share a canonical name collide. The value is only
/// suitable for deduplication inside a single process.
#[inline]
pub fn type_hash<T: ?Sized>() -> u64 {
    fnv1a_64(name_of::<T>().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;
    struct Beta;

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a_64(b""), FNV_OFFSET_BASIS);
        assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_64(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn test_fnv1a_is_const() {
        const HASH: u64 = fnv1a_64(b"Console");
        assert_eq!(HASH, fnv1a_64("Console".as_bytes()));
    }

    #[test]
    fn test_type_hash_is_stable_and_distinct() {
        assert_eq!(type_hash::<Alpha>(), type_hash::<Alpha>());
        assert_ne!(type_hash::<Alpha>(), type_hash::<Beta>());
        assert!(name_of::<Alpha>().ends_with("Alpha"));
    }

    #[test]
    fn test_limits() {
        assert_eq!(<UInt8 as Limits>::MAX, 255);
        assert_eq!(<Int16 as Limits>::MIN, -32768);
        assert_eq!(<UInt64 as Limits>::MIN, 0);
    }
}
