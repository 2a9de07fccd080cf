//! Control helpers for fallible computations.
//!
//! - [`Outcome`]: a value or the error that prevented it, with fallback
//!   accessors
//! - [`retry`] / [`retry_if`]: bounded retry loops with configurable backoff
//! - [`retry_async`] / [`retry_async_if`]: the same for futures (feature
//!   `async`)
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use orderly::control::{retry, Outcome, RetryConfig};
//!
//! let config = RetryConfig::new().with_interval(Duration::ZERO);
//! let outcome: Outcome<i32, _> = retry(&config, || Ok::<_, String>(42)).into();
//!
//! assert_eq!(outcome.value_or(0), 42);
//! ```

mod outcome;
mod retry;

pub use outcome::Outcome;
pub use retry::{
    Backoff, DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS, RetryConfig, RetryError, retry, retry_if,
};

#[cfg(feature = "async")]
pub use retry::{retry_async, retry_async_if};

static_assertions::assert_impl_all!(RetryConfig: Clone, Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32, String>: Clone, Send, Sync);
