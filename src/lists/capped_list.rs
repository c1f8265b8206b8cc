//! The shared contract of every capped list realization.
//!
//! [`CappedList`] is implemented by [`ContiguousCappedList`](crate::ContiguousCappedList),
//! [`DynamicCappedList`](crate::DynamicCappedList) and, with the `stack` feature,
//! [`StackCappedList`](crate::StackCappedList), so code can operate on a capped list without
//! knowing which backend holds the elements.

use core::fmt;
use core::slice;

/// An object-safe abstraction over fixed-capacity, double-ended lists.
///
/// Index 0 is the front, `len() - 1` is the back. The capacity never changes after
/// construction, and no operation lets `len()` exceed it.
///
/// Boundary conditions are values, not panics:
/// - a push on a full list returns `Err(item)`, handing the item back untouched;
/// - a pop on an empty list returns `None`;
/// - `get` past the end and searches that find nothing return `None`.
pub trait CappedList<T> {
    /// Returns the fixed maximum number of elements.
    fn capacity(&self) -> usize;
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;
    /// Returns `true` if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if no further element can be inserted.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
    /// Inserts `item` at index 0, moving every other element one index toward the back.
    fn push_front(&mut self, item: T) -> Result<(), T>;
    /// Appends `item` after the current back element.
    fn push_back(&mut self, item: T) -> Result<(), T>;
    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and drops all elements. The capacity is unchanged.
    fn clear(&mut self);
    /// Returns a shared reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&T>;
    /// Iterates the elements from front to back.
    fn iter(&self) -> slice::Iter<'_, T>;

    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns the lowest index holding a value equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    /// Returns the highest index holding a value equal to `item`.
    ///
    /// Scans from the back, so the first match found is the answer.
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|x| x == item)
    }

    /// Returns `true` if some element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Renders `size=<len>; capacity=<capacity>;\t[e0, e1, ...]`.
    fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = write_summary(&mut out, self.len(), self.capacity(), self.iter());
        out
    }

    /// Appends items from `iter` until the list is full.
    ///
    /// Returns the iterator so the caller can see what did not fit.
    fn extend_back<I>(&mut self, iter: I) -> I::IntoIter
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut iter = iter.into_iter();
        while !self.is_full() {
            match iter.next() {
                Some(item) => {
                    let pushed = self.push_back(item);
                    debug_assert!(pushed.is_ok());
                }
                None => break,
            }
        }
        iter
    }
}

/// Writes the `describe` format shared by every realization's `Display` impl.
pub(crate) fn write_summary<'a, T, W, I>(
    out: &mut W,
    len: usize,
    capacity: usize,
    items: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    W: fmt::Write + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    write!(out, "size={len}; capacity={capacity};\t[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{item}")?;
    }
    out.write_char(']')
}
