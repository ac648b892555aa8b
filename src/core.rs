//! Core sequence abstraction.
//!
//! This module defines [`Sequence`], the index-addressed view every algorithm in this
//! crate works through. Nothing here allocates or resizes: the caller owns the storage.

use std::collections::VecDeque;

/// A mutable, random-access range of elements addressed by zero-based index.
///
/// Implement this for containers that are not contiguous slices (ring buffers,
/// strided views, segmented storage) to sort them in place with [`sort_range`] or
/// search them with [`find_insert_index`].
///
/// Indexing outside `0..len()` is a caller error and is expected to panic.
///
/// [`sort_range`]: crate::algo::sort_range
/// [`find_insert_index`]: crate::algo::find_insert_index
///
/// # Examples
///
/// A view over every other element of a vector:
///
/// ```
/// use rangesort::core::Sequence;
///
/// struct EvenSlots<'a>(&'a mut Vec<u32>);
///
/// impl Sequence for EvenSlots<'_> {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.0.len().div_ceil(2)
///     }
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.0[index * 2]
///     }
///
///     fn get_mut(&mut self, index: usize) -> &mut u32 {
///         &mut self.0[index * 2]
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.0.swap(a * 2, b * 2);
///     }
/// }
/// ```
pub trait Sequence {
    /// Element type stored in the sequence.
    type Item;

    /// Returns the number of addressable elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a shared reference to the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Overwrites the element at `index`, dropping the previous value.
    #[inline]
    fn set(&mut self, index: usize, value: Self::Item) {
        *self.get_mut(index) = value;
    }

    /// Exchanges the elements at `a` and `b`. `a == b` must be allowed.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Explicit Vec impl so callers can pass `&mut vec` without `.as_mut_slice()`.
impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Two backing slices, but O(1) random access, so the algorithms apply unchanged.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}
