//! Capped list over a single fixed-size block of slots.
//!
//! [`ContiguousCappedList`] allocates `capacity` uninitialized slots once, at construction, and
//! never reallocates. Elements always occupy the prefix `[0, len)`: inserting or removing at the
//! front shifts the live region by one slot, one element at a time.
//!
//! # Shift direction
//! - `push_front` walks from the back (`len - 1`) down to `0`, moving each element into the next
//!   higher slot. Walking upward would overwrite elements that have not moved yet.
//! - `pop_front` moves slot 0 out, then walks upward from `1` to `len - 1`, moving each element into
//!   the next lower slot.
//!
//! Slots outside `[0, len)` are logically uninitialized. A moved-out element leaves nothing behind
//! that could be dropped twice or kept alive.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::error::{CappedListError, checked_capacity};
use crate::lists::capped_list::{CappedList, write_summary};

/// A capped list stored in one heap block of `capacity` slots.
///
/// | Operation | Cost |
/// |-----------|------|
/// | `push_back`, `pop_back`, `get` | O(1) |
/// | `push_front`, `pop_front` | O(len) |
/// | `index_of`, `last_index_of`, `contains` | O(len) |
pub struct ContiguousCappedList<T> {
    len: usize,
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> CappedList<T> for ContiguousCappedList<T> {
    fn capacity(&self) -> usize {
        self.capacity()
    }
    fn len(&self) -> usize {
        self.len
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
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
        self.pop_back()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn iter(&self) -> slice::Iter<'_, T> {
        self.iter()
    }
}

impl<T> ContiguousCappedList<T> {
    /// Creates an empty list and allocates all `capacity` slots up front.
    pub fn new(capacity: usize) -> Self {
        tracing::debug!(capacity, "allocating contiguous capped list");
        Self {
            len: 0,
            slots: Box::new_uninit_slice(capacity),
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
        self.slots.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    /// Returns a shared reference to the element at `index`, or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: every slot below `len` is initialized.
            Some(unsafe { self.slots[index].assume_init_ref() })
        } else {
            None
        }
    }

    /// Iterates the live elements from front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized and `MaybeUninit<T>` has the layout of `T`.
        unsafe { slice::from_raw_parts(self.slots.as_ptr() as *const T, self.len) }
    }

    /// Inserts `item` at the front, shifting every element one slot toward the back.
    ///
    /// Returns `Err(item)` without touching the list if it is full.
    pub fn push_front(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity(), "push_front rejected: list is full");
            return Err(item);
        }
        self.make_room_at_front();
        self.slots[0].write(item);
        self.len += 1;
        Ok(())
    }

    /// Appends `item` into slot `len`. No element moves.
    ///
    /// Returns `Err(item)` without touching the list if it is full.
    #[inline(always)]
    pub fn push_back(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity(), "push_back rejected: list is full");
            return Err(item);
        }
        self.slots[self.len].write(item);
        self.len += 1;
        Ok(())
    }

    /// Removes the front element and closes the gap it leaves.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: slot 0 is initialized because `len > 0`; the gap is closed right after, so the
        // moved-out value is never read again.
        let item = unsafe { self.slots[0].assume_init_read() };
        self.close_gap_at_front();
        self.len -= 1;
        Some(item)
    }

    /// Removes and returns the back element. No element moves.
    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: slot `len` was the last initialized slot and is now outside the live region.
            Some(unsafe { self.slots[self.len].assume_init_read() })
        }
    }

    /// Drops every live element. The allocation is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset first: a panicking destructor then leaks the rest instead of double-dropping.
        self.len = 0;
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, len);
            ptr::drop_in_place(live);
        }
    }

    /// Moves slots `[0, len)` to `[1, len + 1)`, highest index first.
    ///
    /// Slot 0 is left logically uninitialized for the caller to fill.
    /// Requires `len < capacity`.
    fn make_room_at_front(&mut self) {
        debug_assert!(self.len < self.slots.len());
        let base = self.slots.as_mut_ptr();
        for i in (0..self.len).rev() {
            // SAFETY: `i + 1 <= len < capacity`, so both slots are in bounds; slot `i + 1` is
            // either past the live region or has already been moved down the line.
            unsafe { ptr::copy_nonoverlapping(base.add(i), base.add(i + 1), 1) };
        }
    }

    /// Moves slots `[1, len)` to `[0, len - 1)`, lowest index first.
    ///
    /// Slot 0 must already have been moved out. Requires `len > 0`.
    fn close_gap_at_front(&mut self) {
        debug_assert!(self.len > 0);
        let base = self.slots.as_mut_ptr();
        for i in 1..self.len {
            // SAFETY: `i < len <= capacity`; slot `i - 1` was vacated on the previous step.
            unsafe { ptr::copy_nonoverlapping(base.add(i), base.add(i - 1), 1) };
        }
    }
}

impl<T> Drop for ContiguousCappedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ContiguousCappedList<T> {
    fn clone(&self) -> Self {
        let mut out = Self::new(self.capacity());
        for item in self.iter() {
            out.slots[out.len].write(item.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for ContiguousCappedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ContiguousCappedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self.len, self.capacity(), self.iter())
    }
}

impl<T: PartialEq> PartialEq for ContiguousCappedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for ContiguousCappedList<T> {}
