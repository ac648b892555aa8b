//! Three-way comparators.
//!
//! - [`ElementComparator`]: the capability every operation is driven by.
//! - [`NaturalOrder`]: the default comparator, built from a [`LessThan`] predicate.
//! - [`ByOrdering`] and [`Reversed`]: adaptors for `Ordering`-returning closures and
//!   for flipping an existing comparator.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A three-way ordering between two elements.
///
/// `compare_elements(first, second)` must return:
/// - a negative value if `first` comes before `second`,
/// - zero if the two are equivalent,
/// - a positive value if `second` comes before `first`.
///
/// Results must stay consistent for a given pair for the duration of one call into
/// this crate. The algorithms never depend on how often, or in which order, the
/// comparator is invoked. An inconsistent comparator yields an unspecified order,
/// never memory unsafety.
///
/// Any `FnMut(&T, &T) -> i32` closure is a comparator:
///
/// ```
/// use rangesort::{sort_range, ElementComparator};
///
/// let mut by_len = |a: &&str, b: &&str| a.len() as i32 - b.len() as i32;
/// assert!(by_len.compare_elements(&"ab", &"abc") < 0);
///
/// let mut words = ["ccc", "a", "bb"];
/// sort_range(&mut by_len, &mut words[..], 0, 2, true);
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
pub trait ElementComparator<T: ?Sized> {
    /// Compares two elements, returning negative, zero or positive.
    fn compare_elements(&mut self, first: &T, second: &T) -> i32;
}

impl<T: ?Sized, F> ElementComparator<T> for F
where
    F: FnMut(&T, &T) -> i32,
{
    #[inline(always)]
    fn compare_elements(&mut self, first: &T, second: &T) -> i32 {
        self(first, second)
    }
}

/// Maps `Less`, `Equal`, `Greater` to `-1`, `0`, `1`.
#[inline(always)]
pub const fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// A strict "less-than" predicate over `T`.
pub trait LessThan<T: ?Sized> {
    /// Returns `true` if `a` is strictly before `b`.
    fn less_than(&self, a: &T, b: &T) -> bool;
}

/// [`LessThan`] backed by `PartialOrd::lt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialOrdLess;

impl<T: PartialOrd + ?Sized> LessThan<T> for PartialOrdLess {
    #[inline(always)]
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> LessThan<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The default comparator: derives a three-way result from a less-than predicate.
///
/// Returns `-1` if `a < b`, `1` if `b < a`, and `0` otherwise, so elements the
/// predicate cannot separate (including incomparable `PartialOrd` values such as
/// `NaN`) are treated as equivalent.
///
/// # Examples
///
/// ```
/// use rangesort::{ElementComparator, NaturalOrder};
///
/// let mut natural = NaturalOrder::new();
/// assert_eq!(natural.compare_elements(&1, &2), -1);
/// assert_eq!(natural.compare_elements(&2, &2), 0);
///
/// // Injected predicate: order by absolute value.
/// let mut by_abs = NaturalOrder::with_less(|a: &i32, b: &i32| a.abs() < b.abs());
/// assert_eq!(by_abs.compare_elements(&-3, &2), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder<L = PartialOrdLess> {
    less: L,
}

impl NaturalOrder {
    /// Natural order of any `PartialOrd` type.
    pub const fn new() -> Self {
        Self {
            less: PartialOrdLess,
        }
    }
}

impl<L> NaturalOrder<L> {
    /// Natural order induced by an injected strict less-than predicate.
    pub const fn with_less(less: L) -> Self {
        Self { less }
    }
}

impl<T: ?Sized, L: LessThan<T>> ElementComparator<T> for NaturalOrder<L> {
    #[inline(always)]
    fn compare_elements(&mut self, first: &T, second: &T) -> i32 {
        if self.less.less_than(first, second) {
            -1
        } else if self.less.less_than(second, first) {
            1
        } else {
            0
        }
    }
}

/// Adapts an `FnMut(&T, &T) -> Ordering` closure into an [`ElementComparator`].
///
/// ```
/// use rangesort::{sort, ByOrdering};
///
/// let mut by_key = ByOrdering::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
/// let mut pairs = vec![(2, 'x'), (1, 'y')];
/// sort(&mut by_key, &mut pairs, false);
/// assert_eq!(pairs, vec![(1, 'y'), (2, 'x')]);
/// ```
pub struct ByOrdering<T: ?Sized, F> {
    compare: F,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T: ?Sized, F> ByOrdering<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, F> ElementComparator<T> for ByOrdering<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare_elements(&mut self, first: &T, second: &T) -> i32 {
        ordering_to_int((self.compare)(first, second))
    }
}

/// Reverses an inner comparator by swapping its arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: ElementComparator<T>> ElementComparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare_elements(&mut self, first: &T, second: &T) -> i32 {
        // Not negation: `-i32::MIN` overflows.
        self.0.compare_elements(second, first)
    }
}
