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

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A growable, contiguous array.
///
/// Insertion and reads past the end are reported as soft assertions on the
/// global registry rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` to the end.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.data.push(value);
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal the length. A larger index is logged as an
    /// assertion failure and the value is handed back unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        crate::tez_soft_assert!(index <= self.data.len(), "Index Out of Bounds!", Err(value));
        self.data.insert(index, value);
        Ok(())
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// First element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.data.first()
    }

    /// Last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.data.last()
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

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwraps the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an array of `len` default-initialized elements.
    pub fn with_len(len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, T::default);
        Self { data }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Creates an array of `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len],
        }
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// An out-of-bounds index is reported as a soft assertion and yields
    /// `T::default()`.
    pub fn value_at(&self, index: usize) -> T {
        crate::tez_soft_assert!(index < self.data.len(), "Index Out of Bounds!", T::default());
        self.data[index].clone()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.data
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
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
    fn test_push_pop_and_ends() {
        let mut array = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.front(), None);

        array.push_back(1);
        array.push_back(2);
        array.push_back(3);
        assert_eq!(array.len(), 3);
        assert_eq!(array.front(), Some(&1));
        assert_eq!(array.back(), Some(&3));

        assert_eq!(array.pop_back(), Some(3));
        assert_eq!(array.as_slice(), &[1, 2]);
        array.clear();
        assert_eq!(array.pop_back(), None);
    }

    #[test]
    fn test_insert_bounds() {
        let mut array: DynamicArray<char> = "ac".chars().collect();
        assert_eq!(array.insert(1, 'b'), Ok(()));
        assert_eq!(array.insert(3, 'd'), Ok(()));
        assert_eq!(array.insert(9, 'x'), Err('x'));
        assert_eq!(array.iter().collect::<String>(), "abcd");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(DynamicArray::<u8>::with_len(3).as_slice(), &[0, 0, 0]);
        assert_eq!(DynamicArray::from_elem('z', 2).as_slice(), &['z', 'z']);
        let from_vec = DynamicArray::from(vec![1, 2]);
        assert_eq!(Vec::from(from_vec), vec![1, 2]);
        assert!(DynamicArray::<String>::with_capacity(8).capacity() >= 8);
    }

    #[test]
    fn test_value_at_out_of_bounds_returns_default() {
        let array = DynamicArray::from(vec![5_u32, 6]);
        assert_eq!(array.value_at(0), 5);
        assert_eq!(array.value_at(2), 0);
    }

    #[test]
    fn test_extend_and_iterate_mut() {
        let mut array = DynamicArray::from(vec![1, 2]);
        array.extend([3, 4]);
        for value in &mut array {
            *value += 10;
        }
        array[0] = 0;
        assert_eq!(array.into_vec(), vec![0, 12, 13, 14]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let array = DynamicArray::from(vec![1, 2, 3]);
        let text = ron::to_string(&array).unwrap();
        assert!(text.starts_with('['));
        let back: DynamicArray<i32> = ron::from_str(&text).unwrap();
        assert_eq!(back, array);
    }
}
