//! Error types for the checked entry points.

use std::fmt;

/// A range argument rejected by [`try_sort_range`] or [`try_find_insert_index`].
///
/// The unchecked operations treat these as caller programming errors (debug
/// assertions and panicking bounds checks). The checked variants report them instead.
///
/// [`try_sort_range`]: crate::algo::try_sort_range
/// [`try_find_insert_index`]: crate::algo::try_find_insert_index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The start of a half-open search range lies past its end.
    Inverted { first: usize, last: usize },

    /// An index bounding the range does not fit the sequence.
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Inverted { first, last } => {
                write!(f, "inverted range: first index {} is past last index {}", first, last)
            }
            RangeError::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: {} for sequence of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for RangeError {}
