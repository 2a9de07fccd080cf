//! # orderly
//!
//! Order-preserving hash collections and small control helpers.
//!
//! ## Overview
//!
//! - **Ordered collections**: [`OrderedSet`](collections::OrderedSet) and
//!   [`OrderedMap`](collections::OrderedMap) pair a hash index with an
//!   insertion-order sequence, giving O(1) membership and deterministic
//!   iteration
//! - **Unordered collections**: [`Set`](collections::Set) with set algebra,
//!   [`Counter`](collections::Counter) and [`Stack`](collections::Stack)
//! - **Control helpers**: [`Outcome`](control::Outcome) for values that may
//!   carry an error, and bounded retry loops with backoff
//!
//! ## Feature Flags
//!
//! - `collections`: Collection types and construction macros (default)
//! - `control`: `Outcome` and the synchronous retry helpers (default)
//! - `async`: Async retry helpers on the tokio timer
//! - `serde`: `Serialize`/`Deserialize` for every collection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let left = OrderedSet::from([1, 2, 3, 4]);
//! let right = OrderedSet::from([3, 4, 5]);
//!
//! assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4, 5]);
//! assert_eq!(left.intersection(&right).as_slice(), &[3, 4]);
//! assert_eq!(left.difference(&right).as_slice(), &[1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every collection type and control helper.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "control")]
pub mod control;
