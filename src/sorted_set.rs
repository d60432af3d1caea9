//! Thread-safe sorted set with a caller-supplied ordering.
//!
//! This module provides [`SortedSet`], a mutable collection that keeps its
//! elements unique and sorted by an injected [`Comparator`], and that can be
//! shared between threads without any outer synchronization.
//!
//! # Overview
//!
//! A `SortedSet` pairs two structures:
//! - a `HashSet` membership index answering "is this element present?" in
//!   O(1) expected time
//! - a `VecDeque` holding every member in comparator order, which makes
//!   ordered snapshots and pops from either end cheap
//!
//! Both live behind a single reader/writer lock. Queries take the lock in
//! shared mode and run concurrently; mutations take it exclusively. Nothing
//! observes one structure updated while the other is not.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity           |
//! |----------------------------|----------------------|
//! | `add`                      | O(log n) + O(n) move |
//! | `remove`                   | O(log n + t) + O(n)  |
//! | `contains`                 | O(1) expected        |
//! | `pop_left` / `pop_right`   | O(1)                 |
//! | `elements` / `pop_all`     | O(n)                 |
//! | `len` / `is_empty`         | O(1)                 |
//!
//! `t` is the number of elements tied with the removed one.
//!
//! # Ties
//!
//! Distinct elements the comparator cannot tell apart are kept in insertion
//! order. Removal scans the run of tied elements for the exact element, so a
//! tie never causes the wrong element to be erased.
//!
//! # Examples
//!
//! ```rust
//! use sortedset::SortedSet;
//!
//! let set = SortedSet::new(|left: &i32, right: &i32| left < right);
//! set.add(3);
//! set.add(1);
//! set.add(4);
//! set.add(1); // duplicate, ignored
//!
//! assert_eq!(set.elements(), vec![1, 3, 4]);
//! assert_eq!(set.len(), 3);
//!
//! set.remove(&3);
//! assert_eq!(set.elements(), vec![1, 4]);
//!
//! assert_eq!(set.pop_left(), Some(1));
//! assert_eq!(set.pop_right(), Some(4));
//! assert!(set.is_empty());
//! ```

use std::borrow::Borrow;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use static_assertions::assert_impl_all;
use tracing::{debug, trace, warn};

use crate::comparator::{Ascending, ByKey, Comparator, Descending};
use crate::error::SortedSetError;
use crate::hash::DefaultHashBuilder;
use crate::sync::StateLock;

/// The structures guarded by a set's lock.
#[derive(Clone)]
struct SetState<T, S> {
    members: HashSet<T, S>,
    order: VecDeque<T>,
}

impl<T: Eq + Hash, S: BuildHasher> SetState<T, S> {
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            members: HashSet::with_capacity_and_hasher(capacity, hasher),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Index just past every element not ordered after `element`.
    #[inline]
    fn insertion_point<C: Comparator<T>>(&self, element: &T, comparator: &C) -> usize {
        self.order
            .partition_point(|probe| !comparator.less(element, probe))
    }

    /// Locates `element` in `order`.
    ///
    /// Binary search finds the start of the run of elements tied with
    /// `element`, then the run is scanned for an equal one. If the comparator
    /// is inconsistent the element can sit outside its run; a linear scan
    /// covers that case.
    fn position_of<C: Comparator<T>>(&self, element: &T, comparator: &C) -> Option<usize> {
        let start = self
            .order
            .partition_point(|probe| comparator.less(probe, element));

        let tied = self
            .order
            .range(start..)
            .take_while(|probe| !comparator.less(element, probe))
            .position(|probe| probe == element);

        if let Some(offset) = tied {
            return Some(start + offset);
        }

        let position = self.order.iter().position(|probe| probe == element);
        if let Some(position) = position {
            warn!(
                position,
                expected = start,
                "element found outside its sorted position, comparator is inconsistent"
            );
        }
        position
    }

    fn insert_sorted<C: Comparator<T>>(&mut self, element: T, comparator: &C) -> bool
    where
        T: Clone,
    {
        if self.members.contains(&element) {
            return false;
        }

        let position = self.insertion_point(&element, comparator);
        self.members.insert(element.clone());
        self.order.insert(position, element);

        trace!(position, len = self.order.len(), "inserted element");
        self.debug_assert_consistent();
        true
    }

    fn remove_sorted<Q, C>(&mut self, element: &Q, comparator: &C) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        C: Comparator<T>,
    {
        let Some(stored) = self.members.get(element) else {
            return false;
        };

        let position = self.position_of(stored, comparator);
        self.members.remove(element);
        if let Some(position) = position {
            self.order.remove(position);
            trace!(position, len = self.order.len(), "removed element");
        }

        self.debug_assert_consistent();
        true
    }

    fn pop_front(&mut self) -> Option<T> {
        let element = self.order.pop_front()?;
        self.members.remove(&element);
        trace!(len = self.order.len(), "popped smallest element");
        self.debug_assert_consistent();
        Some(element)
    }

    fn pop_back(&mut self) -> Option<T> {
        let element = self.order.pop_back()?;
        self.members.remove(&element);
        trace!(len = self.order.len(), "popped largest element");
        self.debug_assert_consistent();
        Some(element)
    }

    fn take_all(&mut self) -> VecDeque<T> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.members.len(),
            self.order.len(),
            "{}",
            CONSISTENCY_PANIC_MESSAGE
        );
    }
}

/// A thread-safe set that keeps unique elements sorted by a comparator.
///
/// Every method takes `&self`; share a set between threads with
/// `Arc<SortedSet<..>>`.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash`.
/// * `C` - The ordering strategy, see [`Comparator`]. Defaults to [`Ascending`].
/// * `S` - The hasher of the membership index. Defaults to [`DefaultHashBuilder`].
///
/// # Locking
///
/// The comparator runs while the lock is held. It must be cheap, must not
/// block, and must never call back into the same set.
///
/// # Examples
///
/// ```rust
/// use sortedset::{Descending, SortedSet};
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(SortedSet::new(Descending));
///
/// let handles: Vec<_> = (0..4)
///     .map(|index| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || set.add(index))
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(set.elements(), vec![3, 2, 1, 0]);
/// ```
pub struct SortedSet<T, C = Ascending, S = DefaultHashBuilder> {
    state: StateLock<SetState<T, S>>,
    comparator: Arc<C>,
}

assert_impl_all!(SortedSet<i32>: Send, Sync, Clone, Default);
assert_impl_all!(SortedSet<String, ByKey<fn(&String) -> usize>>: Send, Sync, Clone);

// =============================================================================
// Construction
// =============================================================================

impl<T, C> SortedSet<T, C, DefaultHashBuilder>
where
    T: Clone + Eq + Hash,
    C: Comparator<T>,
{
    /// Creates an empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::new(|left: &String, right: &String| left.len() < right.len());
    /// set.add("three".to_string());
    /// set.add("a".to_string());
    /// assert_eq!(set.elements(), vec!["a".to_string(), "three".to_string()]);
    /// ```
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self::with_hasher(comparator, DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(comparator, capacity, DefaultHashBuilder::default())
    }

    /// Builds a set from elements already sorted by `comparator`.
    ///
    /// The input is checked in a single pass instead of being inserted one
    /// element at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::Unsorted`] if an element is ordered before its
    /// predecessor and [`SortedSetError::Duplicate`] if an element repeats an
    /// earlier one. The error carries the position of the first violation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::{Ascending, SortedSet, SortedSetError};
    ///
    /// let set = SortedSet::from_sorted_vec(Ascending, vec![1, 3, 5]).unwrap();
    /// assert_eq!(set.elements(), vec![1, 3, 5]);
    ///
    /// let rejected = SortedSet::from_sorted_vec(Ascending, vec![1, 5, 3]);
    /// assert_eq!(rejected.err(), Some(SortedSetError::Unsorted { index: 2 }));
    /// ```
    pub fn from_sorted_vec(comparator: C, elements: Vec<T>) -> Result<Self, SortedSetError> {
        let mut members =
            HashSet::with_capacity_and_hasher(elements.len(), DefaultHashBuilder::default());

        let mut previous: Option<&T> = None;
        for (index, element) in elements.iter().enumerate() {
            if previous.is_some_and(|previous| comparator.less(element, previous)) {
                return Err(SortedSetError::Unsorted { index });
            }
            if !members.insert(element.clone()) {
                return Err(SortedSetError::Duplicate { index });
            }
            previous = Some(element);
        }

        debug!(len = elements.len(), "built set from sorted input");
        Ok(Self {
            state: StateLock::new(SetState {
                members,
                order: VecDeque::from(elements),
            }),
            comparator: Arc::new(comparator),
        })
    }
}

impl<T: Clone + Eq + Hash + Ord> SortedSet<T, Ascending, DefaultHashBuilder> {
    /// Creates an empty set in the natural ascending order of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add_all(["pear", "apple", "fig"]);
    /// assert_eq!(set.elements(), vec!["apple", "fig", "pear"]);
    /// ```
    #[must_use]
    pub fn ascending() -> Self {
        Self::new(Ascending)
    }
}

impl<T: Clone + Eq + Hash + Ord> SortedSet<T, Descending, DefaultHashBuilder> {
    /// Creates an empty set in the reverse natural order of `T`.
    #[must_use]
    pub fn descending() -> Self {
        Self::new(Descending)
    }
}

impl<T, C, S> SortedSet<T, C, S>
where
    T: Clone + Eq + Hash,
    C: Comparator<T>,
    S: BuildHasher,
{
    /// Creates an empty set whose membership index uses `hasher`.
    #[must_use]
    pub fn with_hasher(comparator: C, hasher: S) -> Self {
        Self::with_capacity_and_hasher(comparator, 0, hasher)
    }

    /// Creates an empty set with room for `capacity` elements whose
    /// membership index uses `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(comparator: C, capacity: usize, hasher: S) -> Self {
        Self {
            state: StateLock::new(SetState::with_capacity_and_hasher(capacity, hasher)),
            comparator: Arc::new(comparator),
        }
    }

    /// Returns the comparator that orders this set.
    #[inline]
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds an element, keeping the set sorted.
    ///
    /// Presence is decided by `Eq`, not by the comparator: adding an element
    /// that is already a member does nothing. A new element that ties with
    /// existing ones is placed after them.
    ///
    /// Returns `true` if the element was inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// assert!(set.add(42));
    /// assert!(!set.add(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&self, element: T) -> bool {
        self.state
            .write()
            .insert_sorted(element, self.comparator.as_ref())
    }

    /// Adds every element of `elements`, in iteration order.
    ///
    /// The input is collected before the lock is taken, then all elements are
    /// added under one exclusive acquisition: no other operation interleaves
    /// with the batch.
    ///
    /// Returns the number of elements that were newly inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// assert_eq!(set.add_all([5, 2, 7, 1, 2]), 4);
    /// assert_eq!(set.elements(), vec![1, 2, 5, 7]);
    /// ```
    pub fn add_all<I>(&self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let requested = elements.len();

        let mut state = self.state.write();
        let inserted = elements
            .into_iter()
            .map(|element| state.insert_sorted(element, self.comparator.as_ref()))
            .filter(|inserted| *inserted)
            .count();

        debug!(requested, inserted, len = state.order.len(), "added batch");
        inserted
    }

    /// Removes an element if present.
    ///
    /// Supports borrowed forms of the element type, so a
    /// `SortedSet<String>` can be searched with `&str`.
    ///
    /// Returns `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add("apple".to_string());
    /// assert!(set.remove("apple"));
    /// assert!(!set.remove("apple"));
    /// ```
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state
            .write()
            .remove_sorted(element, self.comparator.as_ref())
    }

    /// Removes and returns the first element in comparator order, or `None`
    /// if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add_all([3, 1, 2]);
    /// assert_eq!(set.pop_left(), Some(1));
    /// assert_eq!(set.pop_left(), Some(2));
    /// assert_eq!(set.pop_left(), Some(3));
    /// assert_eq!(set.pop_left(), None);
    /// ```
    pub fn pop_left(&self) -> Option<T> {
        self.state.write().pop_front()
    }

    /// Removes and returns the last element in comparator order, or `None`
    /// if the set is empty.
    pub fn pop_right(&self) -> Option<T> {
        self.state.write().pop_back()
    }

    /// Removes every element and returns them in comparator order.
    ///
    /// This is a single exclusive operation: no element added concurrently
    /// can be lost between the snapshot and the clear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add_all([5, 2, 7, 1]);
    /// assert_eq!(set.pop_all(), vec![1, 2, 5, 7]);
    /// assert!(set.is_empty());
    /// ```
    pub fn pop_all(&self) -> Vec<T> {
        let elements: Vec<T> = self.state.write().take_all().into();
        debug!(count = elements.len(), "popped all elements");
        elements
    }

    /// Removes every element.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let count = state.order.len();
        state.members.clear();
        state.order.clear();
        debug!(count, "cleared set");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the set contains `element`.
    ///
    /// Only the membership index is consulted; the comparator is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add("hello".to_string());
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.read().members.contains(element)
    }

    /// Returns `true` if every given element is in the set.
    ///
    /// Stops at the first absent element. An empty input yields `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::ascending();
    /// set.add_all([1, 2, 3]);
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// ```
    #[must_use]
    pub fn contains_all<'a, Q, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let elements: Vec<&Q> = elements.into_iter().collect();
        let state = self.state.read();
        elements
            .into_iter()
            .all(|element| state.members.contains(element))
    }

    /// Returns `true` if at least one given element is in the set.
    ///
    /// Stops at the first present element. An empty input yields `false`.
    #[must_use]
    pub fn contains_any<'a, Q, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let elements: Vec<&Q> = elements.into_iter().collect();
        let state = self.state.read();
        elements
            .into_iter()
            .any(|element| state.members.contains(element))
    }

    /// Returns a copy of the elements in comparator order.
    ///
    /// The returned `Vec` is independent of the set.
    #[must_use]
    pub fn elements(&self) -> Vec<T> {
        self.state.read().order.iter().cloned().collect()
    }

    /// Returns a copy of the first element in comparator order without
    /// removing it.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.state.read().order.front().cloned()
    }

    /// Returns a copy of the last element in comparator order without
    /// removing it.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.state.read().order.back().cloned()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().order.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().order.is_empty()
    }

    /// Consumes the set, returning its elements in comparator order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let order = self.state.write().take_all();
        order.into()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone, C, S: Clone> Clone for SortedSet<T, C, S> {
    /// Returns an independent copy that shares only the comparator.
    fn clone(&self) -> Self {
        let state = (*self.state.read()).clone();
        Self {
            state: StateLock::new(state),
            comparator: Arc::clone(&self.comparator),
        }
    }
}

impl<T, C: Default, S: Default> Default for SortedSet<T, C, S> {
    fn default() -> Self {
        Self {
            state: StateLock::new(SetState {
                members: HashSet::with_hasher(S::default()),
                order: VecDeque::new(),
            }),
            comparator: Arc::new(C::default()),
        }
    }
}

impl<T: fmt::Debug, C, S> fmt::Debug for SortedSet<T, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        formatter.debug_set().entries(state.order.iter()).finish()
    }
}

impl<T, C, S> FromIterator<T> for SortedSet<T, C, S>
where
    T: Clone + Eq + Hash,
    C: Comparator<T> + Default,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<T, C, S> Extend<T> for SortedSet<T, C, S>
where
    T: Clone + Eq + Hash,
    C: Comparator<T>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, C, S> IntoIterator for SortedSet<T, C, S>
where
    T: Clone + Eq + Hash,
    C: Comparator<T>,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let order = self.state.write().take_all();
        order.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C, S> serde::Serialize for SortedSet<T, C, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let state = self.state.read();
        let mut seq = serializer.serialize_seq(Some(state.order.len()))?;
        for element in &state.order {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T, C, S> {
    marker: std::marker::PhantomData<fn() -> SortedSet<T, C, S>>,
}

#[cfg(feature = "serde")]
impl<T, C, S> SortedSetVisitor<T, C, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S> serde::de::Visitor<'de> for SortedSetVisitor<T, C, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    C: Comparator<T> + Default,
    S: BuildHasher + Default,
{
    type Value = SortedSet<T, C, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // The input order is not trusted; every element goes through `add`.
        let set = SortedSet::default();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S> serde::Deserialize<'de> for SortedSet<T, C, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    C: Comparator<T> + Default,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

/// Message for the debug assertion guarding the index/sequence pairing.
const CONSISTENCY_PANIC_MESSAGE: &str =
    "membership index and ordered sequence must hold the same elements";

// =============================================================================
// Tests
// =============================================================================
