//! Capped list that delegates storage and shifting to a `Vec`.
//!
//! The `Vec` itself is unbounded; [`DynamicCappedList`] enforces the ceiling before every
//! insertion. Front operations go through `Vec::insert(0, _)` and `Vec::remove(0)`, so they cost
//! O(len) just like the contiguous realization, with the shifting done by the standard library.

use core::fmt;
use core::slice;

use crate::error::{CappedListError, checked_capacity};
use crate::lists::capped_list::{CappedList, write_summary};

/// A capped list backed by a `Vec<T>` with an externally enforced capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicCappedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> CappedList<T> for DynamicCappedList<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }
    fn len(&self) -> usize {
        self.items.len()
    }
    fn is_full(&self) -> bool {
        self.is_full()
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

impl<T> DynamicCappedList<T> {
    /// Creates an empty list. The backing `Vec` reserves `capacity` elements up front.
    pub fn new(capacity: usize) -> Self {
        tracing::debug!(capacity, "allocating dynamic capped list");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Like [`new`](Self::new), for callers holding a signed capacity.
    ///
    /// # Errors
    /// Returns [`CappedListError::NegativeCapacity`] if `capacity < 0`.
    pub fn try_new(capacity: isize) -> Result<Self, CappedListError> {
        checked_capacity(capacity).map(Self::new)
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
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
        self.items.len() >= self.capacity
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
        if self.is_full() {
            tracing::trace!(capacity = self.capacity, "push_front rejected: list is full");
            return Err(item);
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Appends `item`. Returns `Err(item)` if the list is full.
    pub fn push_back(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity, "push_back rejected: list is full");
            return Err(item);
        }
        self.items.push(item);
        Ok(())
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

impl<T: fmt::Display> fmt::Display for DynamicCappedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self.items.len(), self.capacity, &self.items)
    }
}
