//! # Capped Collections
//!
//! Fixed-capacity, double-ended, random-access lists.
//!
//! A capped list holds at most `capacity` elements, fixed when it is built. Elements can be
//! inserted and removed at either end, read by position, and searched from either direction.
//! Hitting a limit is never an error: a push on a full list hands the element back as `Err`,
//! a pop on an empty list returns `None`.
//!
//! ## Realizations
//!
//! All of them implement the [`CappedList`] trait, so code can be written once against the trait.
//!
//! * **[`ContiguousCappedList`]:** one heap block of `capacity` slots allocated at construction.
//!   Front operations shift the live elements in place.
//! * **[`DynamicCappedList`]:** a `Vec<T>` with the capacity ceiling enforced on top. Shifting is
//!   left to `Vec::insert` / `Vec::remove`.
//! * **[`StackCappedList`]:** a `heapless::Vec<T, N>`, capacity `N` known at compile time.
//!   Requires the `stack` feature (on by default).
//!
//! ## Display format
//!
//! Every realization renders as `size=<len>; capacity=<capacity>;` followed by a tab and the
//! elements in brackets.
//!
//! ## Examples
//!
//! ```rust
//! use capped_collections::{CappedList, ContiguousCappedList};
//!
//! let mut list = ContiguousCappedList::new(3);
//!
//! list.push_back(7).unwrap();
//! list.push_back(9).unwrap();
//! list.push_front(5).unwrap();
//!
//! assert!(list.is_full());
//! assert_eq!(list.push_back(1), Err(1));
//! assert_eq!(list.to_string(), "size=3; capacity=3;\t[5, 7, 9]");
//!
//! assert_eq!(list.index_of(&9), Some(2));
//! assert_eq!(list.pop_front(), Some(5));
//! assert_eq!(list.get(0), Some(&7));
//! ```
//!
//! Negative capacities coming from signed arithmetic are rejected up front:
//!
//! ```rust
//! use capped_collections::{CappedListError, DynamicCappedList};
//!
//! let err = DynamicCappedList::<u32>::try_new(-1).unwrap_err();
//! assert_eq!(err, CappedListError::NegativeCapacity(-1));
//! ```

// --- Module Declarations ---

pub mod error;
pub mod lists;

// --- Re-exports ---

pub use error::CappedListError;
pub use lists::capped_list::CappedList;
pub use lists::contiguous::ContiguousCappedList;
pub use lists::dynamic::DynamicCappedList;
#[cfg(feature = "stack")]
pub use lists::stack::StackCappedList;
