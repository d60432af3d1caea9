//! # sortedset
//!
//! A thread-safe sorted set for Rust: unique elements, kept in an order you
//! choose, with O(1) membership tests.
//!
//! ## Overview
//!
//! [`SortedSet`] combines a hash-based membership index with an always-sorted
//! sequence behind one reader/writer lock. It fits deduplicated work lists and
//! priority-like queues that several threads feed and drain.
//!
//! - **Ordering**: any [`Comparator`], including plain closures, [`Ascending`],
//!   [`Descending`], [`ByKey`] and [`Reversed`]
//! - **Concurrency**: shared-mode queries, exclusive-mode mutations, every
//!   operation linearizable
//! - **Snapshots**: [`SortedSet::elements`] and [`SortedSet::pop_all`] return
//!   owned copies that never alias the set
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `SortedSet`
//! - `fxhash`: hash the membership index with `rustc-hash`
//! - `ahash`: hash the membership index with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use sortedset::prelude::*;
//!
//! let queue = SortedSet::new(ByKey::new(|job: &(u8, &str)| job.0));
//! queue.add((2, "compact"));
//! queue.add((1, "flush"));
//! queue.add((1, "flush"));
//!
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.pop_left(), Some((1, "flush")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sortedset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::SortedSetError;
    pub use crate::sorted_set::SortedSet;
}

pub mod comparator;
mod error;
mod hash;
mod sorted_set;
mod sync;
mod typed;

pub use comparator::{Ascending, ByKey, Comparator, Descending, Reversed};
pub use error::SortedSetError;
pub use hash::DefaultHashBuilder;
pub use sorted_set::SortedSet;
pub use typed::*;
