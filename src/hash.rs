//! Hasher used by the membership index.
//!
//! The default is the standard library's `RandomState`. Enabling the
//! `fxhash` feature switches to `rustc_hash::FxBuildHasher`, and enabling
//! `ahash` switches to `ahash::RandomState`. When both features are enabled,
//! `fxhash` takes precedence.

/// The `BuildHasher` a set uses unless one is supplied explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The `BuildHasher` a set uses unless one is supplied explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The `BuildHasher` a set uses unless one is supplied explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
