#![cfg(feature = "stack")]
//! Capped list stored inline, with its capacity fixed at compile time.
//!
//! [`StackCappedList`] wraps a `heapless::Vec<T, N>`. It never allocates, so it suits short
//! windows kept in a struct or on the call stack. The const parameter `N` is the capacity.

use core::fmt;
use core::slice;

use heapless::Vec as HVec;

use crate::lists::capped_list::{CappedList, write_summary};

/// A capped list with `N` inline slots.
///
/// # Compile-time assertions
/// `new()` rejects types whose `size_of::<Self>()` exceeds 16 KiB.
#[derive(Clone)]
pub struct StackCappedList<T, const N: usize> {
    items: HVec<T, N>,
}

impl<T, const N: usize> CappedList<T> for StackCappedList<T, N> {
    fn capacity(&self) -> usize {
        N
    }
    fn len(&self) -> usize {
        self.items.len()
    }
    fn push_front(&mut self, item: T) -> Result<(), T> {
        self.push_front(item)
    }
    fn push_back(&mut self, item: T) -> Result<(), T> {
        self.push_back(item)
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }
    fn clear(&mut self) {
        self.items.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
    fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, const N: usize> StackCappedList<T, N> {
    /// Maximum allowed struct size in bytes.
    const MAX_STACK_SIZE: usize = 16 * 1024;

    /// Creates an empty list with capacity `N`.
    pub fn new() -> Self {
        const {
            assert!(
                core::mem::size_of::<Self>() <= StackCappedList::<T, N>::MAX_STACK_SIZE,
                "StackCappedList is too large! Reduce N."
            );
        }
        Self { items: HVec::new() }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.items.len() >= N
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Inserts `item` at index 0. Returns `Err(item)` if the list is full.
    pub fn push_front(&mut self, item: T) -> Result<(), T> {
        self.items.insert(0, item).inspect_err(|_| {
            tracing::trace!(capacity = N, "push_front rejected: list is full");
        })
    }

    /// Appends `item`. Returns `Err(item)` if the list is full.
    pub fn push_back(&mut self, item: T) -> Result<(), T> {
        self.items.push(item).inspect_err(|_| {
            tracing::trace!(capacity = N, "push_back rejected: list is full");
        })
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, const N: usize> Default for StackCappedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StackCappedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for StackCappedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self.items.len(), N, self.items.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StackCappedList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.items.as_slice() == other.items.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StackCappedList<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_new_and_capacity() {
        let list: StackCappedList<i32, 8> = StackCappedList::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.to_string(), "size=0; capacity=8;\t[]");
    }

    #[test]
    fn test_stack_fill_both_ends() {
        let mut list: StackCappedList<i32, 3> = StackCappedList::new();
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        assert!(list.is_full());
        assert_eq!(list.push_front(0), Err(0));
        assert_eq!(list.push_back(4), Err(4));
        assert_eq!(list.to_string(), "size=3; capacity=3;\t[1, 2, 3]");
    }

    #[test]
    fn test_stack_pop_both_ends() {
        let mut list: StackCappedList<&str, 4> = StackCappedList::default();
        list.push_back("b").unwrap();
        list.push_front("a").unwrap();
        list.push_back("c").unwrap();
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_stack_zero_capacity() {
        let mut list: StackCappedList<u8, 0> = StackCappedList::new();
        assert!(list.is_full());
        assert_eq!(list.push_front(1), Err(1));
        assert_eq!(list.push_back(1), Err(1));
    }

    #[test]
    fn test_stack_traits_clone_eq_debug() {
        let mut list: StackCappedList<i32, 4> = StackCappedList::new();
        list.push_back(7).unwrap();
        let cloned = list.clone();
        assert_eq!(cloned, list);
        assert_eq!(format!("{:?}", cloned), "[7]");
    }

    #[test]
    fn test_stack_capped_list_trait() {
        let mut list: StackCappedList<i32, 4> = StackCappedList::new();
        let any: &mut dyn CappedList<i32> = &mut list;
        assert_eq!(any.capacity(), 4);
        any.push_front(2).unwrap();
        any.push_front(1).unwrap();
        assert_eq!(any.front(), Some(&1));
        assert_eq!(any.back(), Some(&2));
        any.clear();
        assert!(any.is_empty());
    }
}
