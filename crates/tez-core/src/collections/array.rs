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

use std::ops::{Index, IndexMut};

/// A fixed-size array of `N` elements stored inline.
///
/// Indexing with `[]` panics on an out-of-bounds index like a slice does;
/// [`value_at`](Array::value_at) logs the failure and returns a default
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Wraps an existing array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Builds an array by calling `f` with each index.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` when `N` is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Overwrites every element with the value produced for its index.
    pub fn fill_with<F: FnMut(usize) -> T>(&mut self, mut f: F) {
        for (index, slot) in self.data.iter_mut().enumerate() {
            *slot = f(index);
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Views the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwraps the inner array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Clone + Default, const N: usize> Array<T, N> {
    /// Returns a copy of the element at `index`.
    ///
    /// An out-of-bounds index is reported as a soft assertion on the global
    /// registry and yields `T::default()`.
    pub fn value_at(&self, index: usize) -> T {
        crate::tez_soft_assert!(index < N, "Index Out of Bounds!", T::default());
        self.data[index].clone()
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_len() {
        let array: Array<i32, 4> = Array::default();
        assert_eq!(array.len(), 4);
        assert!(!array.is_empty());
        assert_eq!(array.as_slice(), &[0, 0, 0, 0]);
        assert!(Array::<u8, 0>::default().is_empty());
    }

    #[test]
    fn test_fill_and_fill_with() {
        let mut array: Array<u32, 3> = Array::default();
        array.fill(7);
        assert_eq!(array.into_inner(), [7, 7, 7]);

        array.fill_with(|i| (i * i) as u32);
        assert_eq!(array.as_slice(), &[0, 1, 4]);
    }

    #[test]
    fn test_checked_access() {
        let mut array = Array::new([1, 2, 3]);
        assert_eq!(array.get(2), Some(&3));
        assert_eq!(array.get(3), None);

        if let Some(value) = array.get_mut(0) {
            *value = 10;
        }
        array[1] += 5;
        assert_eq!(array.as_slice(), &[10, 7, 3]);
    }

    #[test]
    fn test_value_at_out_of_bounds_returns_default() {
        let array = Array::new(["a".to_string(), "b".to_string()]);
        assert_eq!(array.value_at(1), "b");
        assert_eq!(array.value_at(2), "");
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let array = Array::new([1, 2]);
        let _ = array[2];
    }

    #[test]
    fn test_iteration() {
        let mut array: Array<i32, 4> = Array::from_fn(|i| i as i32);
        for value in &mut array {
            *value *= 2;
        }
        assert_eq!(array.iter().sum::<i32>(), 12);
        let collected: Vec<i32> = array.into_iter().collect();
        assert_eq!(collected, vec![0, 2, 4, 6]);
    }
}
