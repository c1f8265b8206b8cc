//! Construction errors for the capped lists.
//!
//! Only construction can fail. Every other boundary (full, empty, out of range, not found) is
//! reported through `Result<(), T>`, `Option` or `bool` return values.

use thiserror::Error;

/// Error returned by the fallible `try_new` constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CappedListError {
    /// The requested capacity was below zero.
    #[error("capacity must not be negative, got {0}")]
    NegativeCapacity(isize),
}

/// Validates a signed capacity request and converts it to a `usize`.
pub(crate) fn checked_capacity(capacity: isize) -> Result<usize, CappedListError> {
    usize::try_from(capacity).map_err(|_| {
        tracing::debug!(capacity, "rejecting capped list with negative capacity");
        CappedListError::NegativeCapacity(capacity)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_capacity_accepts_zero_and_positive() {
        assert_eq!(checked_capacity(0), Ok(0));
        assert_eq!(checked_capacity(10), Ok(10));
    }

    #[test]
    fn test_checked_capacity_rejects_negative() {
        assert_eq!(
            checked_capacity(-1),
            Err(CappedListError::NegativeCapacity(-1))
        );
    }

    #[test]
    fn test_error_display() {
        let err = CappedListError::NegativeCapacity(-3);
        assert_eq!(err.to_string(), "capacity must not be negative, got -3");
    }
}
