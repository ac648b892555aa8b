//! # Rangesort
//!
//! `rangesort` sorts a range of any index-addressed sequence in place, driven entirely by a
//! caller-supplied three-way comparator, and finds where a new element belongs in an
//! already-sorted range.
//!
//! ## Key Features
//!
//! - **Two sort modes**: a hybrid quicksort (selection sort for ranges of up to eight
//!   elements, Hoare partitioning above that) and a stable adjacent-transposition mode that
//!   keeps equivalent elements in their original order.
//! - **No allocation**: pending ranges live in a fixed, cache-aligned stack on the call frame.
//! - **Any random-access storage**: the [`Sequence`] trait lets slices, `Vec`, `VecDeque`
//!   and custom containers be sorted without copying them into a slice.
//! - **Stateful comparators**: [`ElementComparator`] takes `&mut self`, and any
//!   `FnMut(&T, &T) -> i32` closure qualifies.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use rangesort::{sort, NaturalOrder};
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! sort(&mut NaturalOrder::new(), &mut data, false);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ### Retaining the Order of Equivalent Elements
//!
//! ```rust
//! use rangesort::sort_range;
//!
//! let mut by_first = |a: &(i32, char), b: &(i32, char)| a.0 - b.0;
//! let mut data = [(1, 'a'), (1, 'b'), (0, 'c')];
//! sort_range(&mut by_first, &mut data[..], 0, 2, true);
//!
//! assert_eq!(data, [(0, 'c'), (1, 'a'), (1, 'b')]);
//! ```
//!
//! ### Sorted Insertion
//!
//! ```rust
//! use rangesort::{find_insert_index, insert_sorted, NaturalOrder};
//!
//! let mut data = vec![1, 2, 4, 5];
//! assert_eq!(find_insert_index(&mut NaturalOrder::new(), &data, &3, 0, 4), 2);
//!
//! insert_sorted(&mut NaturalOrder::new(), &mut data, 3);
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Hybrid mode**: O(N log N) on average, O(N²) worst case. Runs of equal elements are
//!   absorbed by the partition cursors rather than degrading it.
//! - **Retain-order mode**: O(N) on sorted input, O(N²) worst case.
//! - **Memory Overhead**: none on the heap; a fixed `2 * usize::BITS` index stack on the
//!   call frame in hybrid mode.

pub mod algo;
pub mod comparator;
pub mod core;
pub mod error;

pub use crate::algo::{
    find_insert_index, index_of_sorted, insert_sorted, sort, sort_by, sort_range,
    try_find_insert_index, try_sort_range,
};
pub use crate::comparator::{ByOrdering, ElementComparator, LessThan, NaturalOrder, Reversed};
pub use crate::core::Sequence;
pub use crate::error::RangeError;

pub mod prelude {
    pub use crate::algo::{find_insert_index, insert_sorted, sort, sort_by, sort_range};
    pub use crate::comparator::{ElementComparator, NaturalOrder};
    pub use crate::core::Sequence;
}
