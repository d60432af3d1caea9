//! Reader/writer lock used to guard a set's state.
//!
//! `parking_lot::RwLock` backs the lock in normal builds. When compiled with
//! `--cfg loom` the loom lock is used instead so that the model checker can
//! explore every interleaving of readers and writers.

#[cfg(not(loom))]
pub(crate) use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

#[cfg(loom)]
pub(crate) use loom::sync::{RwLockReadGuard, RwLockWriteGuard};

/// A single lock covering every structure of a set.
pub(crate) struct StateLock<T> {
    #[cfg(not(loom))]
    inner: parking_lot::RwLock<T>,
    #[cfg(loom)]
    inner: loom::sync::RwLock<T>,
}

impl<T> StateLock<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            #[cfg(not(loom))]
            inner: parking_lot::RwLock::new(value),
            #[cfg(loom)]
            inner: loom::sync::RwLock::new(value),
        }
    }

    /// Acquires the lock in shared mode.
    #[cfg(not(loom))]
    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Acquires the lock in exclusive mode.
    #[cfg(not(loom))]
    #[inline]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write()
    }

    // Poisoning is ignored to match parking_lot. Mutations run the comparator
    // before touching either structure, so a panicking comparator leaves the
    // state intact.
    #[cfg(loom)]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(loom)]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
