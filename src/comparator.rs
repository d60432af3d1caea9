//! Ordering strategies for [`SortedSet`](crate::SortedSet).
//!
//! A set never asks its elements how to order themselves. Instead it is
//! handed a [`Comparator`] at construction time and consults it whenever an
//! element has to be positioned. This keeps one element type usable with
//! several orderings at once.
//!
//! Any `Fn(&T, &T) -> bool` closure is a comparator, and a few reusable
//! strategies are provided:
//!
//! - [`Ascending`]: the natural `Ord` order
//! - [`Descending`]: the reverse of the natural order
//! - [`ByKey`]: ascending order of a key derived from each element
//! - [`Reversed`]: flips any other comparator
//!
//! # Contract
//!
//! `less` must describe a strict weak order: irreflexive, transitive, and
//! consistent with `Eq` of the element type. A comparator that breaks this
//! contract does not cause memory unsafety or panics, but the ordered view of
//! the set becomes unspecified.
//!
//! # Examples
//!
//! ```rust
//! use sortedset::{ByKey, Comparator, Descending};
//!
//! assert!(Descending.less(&3, &1));
//!
//! let by_length = ByKey::new(|word: &&str| word.len());
//! assert!(by_length.less(&"ox", &"zebra"));
//! assert!(by_length.equivalent(&"ox", &"ab"));
//! ```

use std::fmt;

/// A strict "less than" predicate used to position elements.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `left` must be placed before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Returns `true` if neither element is ordered before the other.
    ///
    /// Two distinct elements can be equivalent; such a pair is called a tie.
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        !self.less(left, right) && !self.less(right, left)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Orders elements by their `Ord` implementation, smallest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: Ord + ?Sized> Comparator<T> for Ascending {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }
}

/// Orders elements by their `Ord` implementation, largest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Comparator<T> for Descending {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        right < left
    }
}

/// Orders elements by a key extracted from each of them.
///
/// Elements whose keys are equal tie, and a set keeps tied elements in the
/// order they were added.
///
/// # Examples
///
/// ```rust
/// use sortedset::{ByKey, SortedSet};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Job {
///     name: &'static str,
///     priority: u8,
/// }
///
/// let jobs = SortedSet::new(ByKey::new(|job: &Job| job.priority));
/// jobs.add(Job { name: "index", priority: 2 });
/// jobs.add(Job { name: "backup", priority: 1 });
///
/// assert_eq!(jobs.pop_left().map(|job| job.name), Some("backup"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a comparator ordering by `key`.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        (self.key)(left) < (self.key)(right)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// Reverses the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.0.less(right, left)
    }
}
