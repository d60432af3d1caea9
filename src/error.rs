//! Errors reported by validating constructors.
//!
//! Ordinary set operations never fail. Only bulk constructors that trust
//! their input to be pre-sorted check it and report the first violation.

use thiserror::Error;

/// The reason a pre-sorted input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortedSetError {
    /// The element at `index` is ordered before its predecessor.
    #[error("element at index {index} is out of order")]
    Unsorted {
        /// Position of the offending element in the input.
        index: usize,
    },
    /// The element at `index` is equal to an earlier element.
    #[error("element at index {index} is a duplicate")]
    Duplicate {
        /// Position of the offending element in the input.
        index: usize,
    },
}

impl SortedSetError {
    /// Returns the input position of the offending element.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Unsorted { index } | Self::Duplicate { index } => *index,
        }
    }
}
