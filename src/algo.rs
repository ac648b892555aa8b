//! Sorting and sorted-search algorithms.
//!
//! This module implements:
//! - **Retain-order sort**: adjacent-transposition insertion sort. Stable, quadratic worst case.
//! - **Hybrid sort**: quicksort with a Hoare partition around the midpoint element, driven by an
//!   explicit range stack instead of recursion.
//! - **Selection sort**: fallback for ranges of at most [`SELECTION_SORT_THRESHOLD`] elements.
//! - **Insertion-index search**: binary search for where a new element belongs in a sorted range.
//!
//! The main entry points are [`sort_range`] and [`find_insert_index`].

use crate::comparator::{ByOrdering, ElementComparator};
use crate::core::Sequence;
use crate::error::RangeError;
use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Ranges of at most this many elements are selection sorted instead of partitioned.
pub const SELECTION_SORT_THRESHOLD: usize = 8;

/// Depth of the deferred-range stack used by the hybrid sort.
///
/// Every push happens while the loop moves on to the smaller side of a partition, so
/// with `k` ranges deferred the range being worked on holds at most `n / 2^k` elements.
/// The stack cannot grow past `log2(n)` entries, and `usize::BITS` levels cover any
/// addressable sequence.
pub const RANGE_STACK_CAPACITY: usize = usize::BITS as usize;

/// Sorts the inclusive range `[first, last]` of `sequence` in place.
///
/// With `retain_order` set, elements the comparator deems equivalent keep their original
/// relative order; this mode is quadratic in the worst case. Without it, a hybrid
/// quicksort is used and equivalent elements may be reordered, even when the range is
/// already sorted. Re-sorting a sorted range leaves it unchanged element for element in
/// hybrid mode only if the comparator is a total order (equivalent means identical).
///
/// A range with `last <= first` holds at most one element and is left untouched.
/// Nothing is allocated.
///
/// # Panics
///
/// Panics if `last` is out of bounds for a non-trivial range (through the sequence's
/// indexing). See [`try_sort_range`] for a checked variant.
///
/// # Examples
///
/// ```
/// use rangesort::{sort_range, NaturalOrder};
///
/// let mut data = [9, 5, 3, 4, 1, 2, 0];
/// // Sort only the middle five elements.
/// sort_range(&mut NaturalOrder::new(), &mut data[..], 1, 5, false);
///
/// assert_eq!(data, [9, 1, 2, 3, 4, 5, 0]);
/// ```
pub fn sort_range<S, C>(
    comparator: &mut C,
    sequence: &mut S,
    first: usize,
    last: usize,
    retain_order: bool,
) where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    if last <= first {
        return;
    }

    if retain_order {
        transposition_sort(comparator, sequence, first, last);
    } else {
        hybrid_quicksort(comparator, sequence, first, last);
    }
}

/// Sorts the whole sequence in place. See [`sort_range`].
///
/// ```
/// use rangesort::{sort, NaturalOrder};
///
/// let mut data = vec![5, 3, 4, 1, 2];
/// sort(&mut NaturalOrder::new(), &mut data, false);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn sort<S, C>(comparator: &mut C, sequence: &mut S, retain_order: bool)
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    let len = sequence.len();
    if len > 1 {
        sort_range(comparator, sequence, 0, len - 1, retain_order);
    }
}

/// Sorts a slice with an `Ordering`-returning closure.
///
/// ```
/// use rangesort::sort_by;
///
/// let mut data = vec![(1, 'a'), (1, 'b'), (0, 'c')];
/// sort_by(&mut data, true, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(data, vec![(0, 'c'), (1, 'a'), (1, 'b')]);
/// ```
pub fn sort_by<T, F>(data: &mut [T], retain_order: bool, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparator = ByOrdering::new(compare);
    sort(&mut comparator, data, retain_order);
}

/// Checked variant of [`sort_range`].
///
/// Trivial ranges (`last <= first`) are accepted as a no-op whatever their bounds.
/// A non-trivial range must end inside the sequence.
///
/// ```
/// use rangesort::{try_sort_range, NaturalOrder, RangeError};
///
/// let mut data = vec![3, 1, 2];
/// let err = try_sort_range(&mut NaturalOrder::new(), &mut data, 0, 3, false);
/// assert_eq!(err, Err(RangeError::OutOfBounds { index: 3, len: 3 }));
///
/// try_sort_range(&mut NaturalOrder::new(), &mut data, 0, 2, false).unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn try_sort_range<S, C>(
    comparator: &mut C,
    sequence: &mut S,
    first: usize,
    last: usize,
    retain_order: bool,
) -> Result<(), RangeError>
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    if last <= first {
        return Ok(());
    }

    let len = sequence.len();
    if last >= len {
        return Err(RangeError::OutOfBounds { index: last, len });
    }

    sort_range(comparator, sequence, first, last, retain_order);
    Ok(())
}

/// Stable sort by adjacent transposition.
///
/// Walks forward; whenever a pair is out of order it is swapped and the cursor steps
/// back one pair, so the moved element keeps sinking until it meets an element that is
/// not greater. An element never crosses an equivalent one.
fn transposition_sort<S, C>(comparator: &mut C, sequence: &mut S, first: usize, last: usize)
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    let mut i = first;
    while i < last {
        if comparator.compare_elements(sequence.get(i), sequence.get(i + 1)) > 0 {
            sequence.swap(i, i + 1);

            if i > first {
                i -= 1;
                continue;
            }
        }
        i += 1;
    }
}

/// Selection sort over the inclusive range `[first, last]`.
///
/// Repeatedly moves the maximum of the unsorted prefix to its end.
fn selection_sort<S, C>(comparator: &mut C, sequence: &mut S, first: usize, last: usize)
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    let mut end = last;
    while end > first {
        let mut max_index = first;
        for k in (first + 1)..=end {
            if comparator.compare_elements(sequence.get(k), sequence.get(max_index)) > 0 {
                max_index = k;
            }
        }

        sequence.swap(end, max_index);
        end -= 1;
    }
}

// Cache-aligned pending ranges, kept as two parallel index arrays.
#[cuneiform]
struct RangeStack {
    from: [usize; RANGE_STACK_CAPACITY],
    to: [usize; RANGE_STACK_CAPACITY],
    len: usize,
    limit: usize,
}

impl RangeStack {
    #[inline(always)]
    fn new() -> Self {
        Self::with_limit(RANGE_STACK_CAPACITY)
    }

    /// A stack that reports itself full after `limit` entries (clamped to the capacity).
    #[inline(always)]
    fn with_limit(limit: usize) -> Self {
        RangeStack {
            from: [0; RANGE_STACK_CAPACITY],
            to: [0; RANGE_STACK_CAPACITY],
            len: 0,
            limit: limit.min(RANGE_STACK_CAPACITY),
        }
    }

    /// Defers `[from, to]`. Returns `false` if the stack is full.
    #[inline(always)]
    fn push(&mut self, from: usize, to: usize) -> bool {
        if self.len == self.limit {
            return false;
        }

        self.from[self.len] = from;
        self.to[self.len] = to;
        self.len += 1;
        true
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<(usize, usize)> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some((self.from[self.len], self.to[self.len]))
    }
}

/// Iterative quicksort over the inclusive range `[first, last]`.
///
/// 1. Small ranges go to [`selection_sort`].
/// 2. Otherwise the midpoint element is swapped to `lo` and used as the pivot.
/// 3. Hoare partition: `i` climbs past elements `<=` pivot, `j` descends past elements
///    `>=` pivot, out-of-place pairs are swapped until the cursors cross, and the pivot
///    lands at `j`.
/// 4. The larger side is pushed onto the [`RangeStack`] and the loop continues on the
///    smaller side; sides under two elements are dropped.
///
/// Elements equal to the pivot satisfy both cursor conditions, so a long run of
/// duplicates is consumed by the cursors instead of being split one element at a time.
fn hybrid_quicksort<S, C>(comparator: &mut C, sequence: &mut S, first: usize, last: usize)
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    hybrid_quicksort_with(comparator, sequence, first, last, RangeStack::new());
}

/// [`hybrid_quicksort`] over a caller-provided stack.
///
/// A range that cannot be deferred because the stack is full is selection sorted on the
/// spot. With the full [`RANGE_STACK_CAPACITY`] this never happens.
fn hybrid_quicksort_with<S, C>(
    comparator: &mut C,
    sequence: &mut S,
    first: usize,
    last: usize,
    mut stack: RangeStack,
) where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    let mut lo = first;
    let mut hi = last;

    loop {
        let size = hi - lo + 1;

        if size <= SELECTION_SORT_THRESHOLD {
            selection_sort(comparator, sequence, lo, hi);
        } else {
            let mid = lo + (size >> 1);
            sequence.swap(mid, lo);

            let mut i = lo;
            let mut j = hi + 1;

            loop {
                loop {
                    i += 1;
                    if i > hi || comparator.compare_elements(sequence.get(i), sequence.get(lo)) > 0
                    {
                        break;
                    }
                }

                loop {
                    j -= 1;
                    if j <= lo || comparator.compare_elements(sequence.get(j), sequence.get(lo)) < 0
                    {
                        break;
                    }
                }

                if j < i {
                    break;
                }

                sequence.swap(i, j);
            }

            sequence.swap(j, lo);

            // Left side is [lo, j - 1], right side is [i, hi].
            let left_len = j - lo;
            let right_len = hi + 1 - i;

            if left_len >= right_len {
                if lo + 1 < j && !stack.push(lo, j - 1) {
                    selection_sort(comparator, sequence, lo, j - 1);
                }

                if i < hi {
                    lo = i;
                    continue;
                }
            } else {
                if i < hi && !stack.push(i, hi) {
                    selection_sort(comparator, sequence, i, hi);
                }

                if lo + 1 < j {
                    hi = j - 1;
                    continue;
                }
            }
        }

        match stack.pop() {
            Some((from, to)) => {
                lo = from;
                hi = to;
            }
            None => break,
        }
    }
}

/// Finds the index at which `new_element` should be inserted into the sorted half-open
/// range `[first, last)` to keep it sorted.
///
/// The range must already be sorted by `comparator`. The result lies in `[first, last]`.
/// If the search meets an element equivalent to `new_element` at the low edge of its
/// window, it returns the position just after that element, which is not necessarily
/// after the last duplicate.
///
/// `first <= last` is a precondition, checked only in debug builds. See
/// [`try_find_insert_index`] for a checked variant.
///
/// # Examples
///
/// ```
/// use rangesort::{find_insert_index, NaturalOrder};
///
/// let data = [1, 2, 4, 5];
/// assert_eq!(find_insert_index(&mut NaturalOrder::new(), &data[..], &3, 0, 4), 2);
///
/// let dupes = [1, 3, 3, 5];
/// assert_eq!(find_insert_index(&mut NaturalOrder::new(), &dupes[..], &3, 0, 4), 3);
/// ```
pub fn find_insert_index<S, C>(
    comparator: &mut C,
    sequence: &S,
    new_element: &S::Item,
    mut first: usize,
    mut last: usize,
) -> usize
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    debug_assert!(first <= last, "first ({}) > last ({})", first, last);

    while first < last {
        if comparator.compare_elements(new_element, sequence.get(first)) == 0 {
            first += 1;
            break;
        }

        let halfway = first + (last - first) / 2;

        if halfway == first {
            if comparator.compare_elements(new_element, sequence.get(halfway)) >= 0 {
                first += 1;
            }
            break;
        } else if comparator.compare_elements(new_element, sequence.get(halfway)) >= 0 {
            first = halfway;
        } else {
            last = halfway;
        }
    }

    first
}

/// Checked variant of [`find_insert_index`].
///
/// Rejects `first > last` and `last > sequence.len()`.
pub fn try_find_insert_index<S, C>(
    comparator: &mut C,
    sequence: &S,
    new_element: &S::Item,
    first: usize,
    last: usize,
) -> Result<usize, RangeError>
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    if first > last {
        return Err(RangeError::Inverted { first, last });
    }

    let len = sequence.len();
    if last > len {
        return Err(RangeError::OutOfBounds { index: last, len });
    }

    Ok(find_insert_index(comparator, sequence, new_element, first, last))
}

/// Inserts `element` into a sorted `Vec`, keeping it sorted. Returns the index used.
///
/// ```
/// use rangesort::{insert_sorted, NaturalOrder};
///
/// let mut data = vec![10, 20, 30];
/// assert_eq!(insert_sorted(&mut NaturalOrder::new(), &mut data, 25), 2);
/// assert_eq!(data, vec![10, 20, 25, 30]);
/// ```
pub fn insert_sorted<T, C>(comparator: &mut C, data: &mut Vec<T>, element: T) -> usize
where
    C: ElementComparator<T> + ?Sized,
{
    let index = find_insert_index(comparator, &*data, &element, 0, data.len());
    data.insert(index, element);
    index
}

/// Searches a sorted sequence for an element equivalent to `element`.
///
/// Returns the index of some equivalent element, or `None` if there is none.
pub fn index_of_sorted<S, C>(comparator: &mut C, sequence: &S, element: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    C: ElementComparator<S::Item> + ?Sized,
{
    let mut first = 0;
    let mut last = sequence.len();

    while first < last {
        if comparator.compare_elements(element, sequence.get(first)) == 0 {
            return Some(first);
        }

        let halfway = first + (last - first) / 2;
        if halfway == first {
            break;
        }

        if comparator.compare_elements(element, sequence.get(halfway)) >= 0 {
            first = halfway;
        } else {
            last = halfway;
        }
    }

    None
}
