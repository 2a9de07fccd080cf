//! Retrying fallible operations.
//!
//! This module runs an operation until it succeeds, up to a bounded number of
//! attempts, waiting between attempts according to a [`Backoff`] policy.
//!
//! - [`retry`] retries every failure.
//! - [`retry_if`] consults a predicate and stops at the first failure it
//!   rejects.
//! - [`retry_async`] and [`retry_async_if`] (feature `async`) do the same for
//!   futures, sleeping on the tokio timer.
//!
//! When no attempt succeeds the last failure is returned inside a
//! [`RetryError`], together with the number of attempts made. No delay is
//! applied after the final attempt.
//!
//! Every failed attempt is logged through `tracing` at `WARN`; giving up is
//! logged at `ERROR`.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use orderly::control::{retry, RetryConfig};
//!
//! let config = RetryConfig::new()
//!     .with_max_attempts(5)
//!     .with_interval(Duration::ZERO);
//!
//! let mut calls = 0;
//! let result = retry(&config, || {
//!     calls += 1;
//!     if calls < 3 { Err("not yet") } else { Ok(calls) }
//! });
//!
//! assert_eq!(result.ok(), Some(3));
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

/// Default number of attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base interval between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

type BackoffFunction = Arc<dyn Fn(u32, Duration) -> Duration + Send + Sync>;

// =============================================================================
// Backoff
// =============================================================================

/// How long to wait after a failed attempt.
///
/// Attempts are numbered from 1; the delay is computed from the number of the
/// attempt that just failed and the configured base interval.
#[derive(Clone, Default)]
pub enum Backoff {
    /// Always wait the base interval.
    #[default]
    Fixed,
    /// Wait `interval * attempt`.
    Linear,
    /// Wait `interval * 2^(attempt - 1)`.
    Exponential,
    /// Wait whatever the function returns for `(attempt, interval)`.
    Custom(BackoffFunction),
}

impl Backoff {
    /// Builds a [`Backoff::Custom`] policy from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use orderly::control::Backoff;
    ///
    /// let backoff = Backoff::custom(|attempt, interval| interval * (attempt + 1));
    /// assert_eq!(backoff.delay(2, Duration::from_millis(10)), Duration::from_millis(30));
    /// ```
    pub fn custom<F>(function: F) -> Self
    where
        F: Fn(u32, Duration) -> Duration + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(function))
    }

    /// Delay to apply after attempt number `attempt` failed.
    ///
    /// Overflow saturates at [`Duration::MAX`].
    pub fn delay(&self, attempt: u32, interval: Duration) -> Duration {
        match self {
            Self::Fixed => interval,
            Self::Linear => interval.checked_mul(attempt).unwrap_or(Duration::MAX),
            Self::Exponential => exponential_delay(attempt, interval),
            Self::Custom(function) => function(attempt, interval),
        }
    }
}

/// `interval * 2^(attempt - 1)`, doubling step by step until it overflows.
fn exponential_delay(attempt: u32, interval: Duration) -> Duration {
    if interval.is_zero() {
        return Duration::ZERO;
    }
    let mut delay = interval;
    for _ in 1..attempt {
        match delay.checked_mul(2) {
            Some(doubled) => delay = doubled,
            None => return Duration::MAX,
        }
    }
    delay
}

impl fmt::Debug for Backoff {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => formatter.write_str("Fixed"),
            Self::Linear => formatter.write_str("Linear"),
            Self::Exponential => formatter.write_str("Exponential"),
            Self::Custom(_) => formatter.write_str("Custom(..)"),
        }
    }
}

// =============================================================================
// RetryConfig
// =============================================================================

/// Settings for a retry loop.
///
/// The default configuration makes 3 attempts, one second apart.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use orderly::control::{Backoff, RetryConfig};
///
/// let config = RetryConfig::new()
///     .with_max_attempts(4)
///     .with_interval(Duration::from_millis(100))
///     .with_backoff(Backoff::Exponential);
///
/// assert_eq!(config.delay_after(1), Duration::from_millis(100));
/// assert_eq!(config.delay_after(3), Duration::from_millis(400));
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    max_attempts: u32,
    interval: Duration,
    backoff: Backoff,
}

impl RetryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
            backoff: Backoff::Fixed,
        }
    }

    /// Sets the maximum number of attempts. Zero is treated as one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the base interval between attempts.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the backoff policy.
    #[must_use]
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// The number of attempts a retry loop will make at most.
    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// The base interval.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The backoff policy.
    #[inline]
    pub const fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// The delay applied after attempt number `attempt` failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt, self.interval)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// RetryError
// =============================================================================

/// The failure returned when a retry loop gives up.
///
/// Both variants carry the last error produced by the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetryError<E> {
    /// Every allowed attempt failed.
    #[error("operation failed after {attempts} attempt(s): {source}")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The error of the final attempt.
        source: E,
    },
    /// An attempt failed with an error the retry predicate rejected.
    #[error("operation failed with a non-retryable error on attempt {attempt}: {source}")]
    Aborted {
        /// Number of the attempt that failed.
        attempt: u32,
        /// The rejected error.
        source: E,
    },
}

impl<E> RetryError<E> {
    /// Number of attempts made before giving up.
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } => *attempts,
            Self::Aborted { attempt, .. } => *attempt,
        }
    }

    /// Returns `true` if the loop ran out of attempts.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// The last error produced by the operation.
    pub const fn last_error(&self) -> &E {
        match self {
            Self::Exhausted { source, .. } | Self::Aborted { source, .. } => source,
        }
    }

    /// Unwraps the last error produced by the operation.
    pub fn into_inner(self) -> E {
        match self {
            Self::Exhausted { source, .. } | Self::Aborted { source, .. } => source,
        }
    }
}

// =============================================================================
// Retry loops
// =============================================================================

/// What to do after a failed attempt.
enum NextStep<E> {
    Wait(Duration),
    GiveUp(RetryError<E>),
}

fn after_failure<E: fmt::Display>(
    config: &RetryConfig,
    attempt: u32,
    error: E,
    retryable: bool,
) -> NextStep<E> {
    let max_attempts = config.max_attempts();
    tracing::warn!(attempt, max_attempts, error = %error, "attempt failed");

    if !retryable {
        tracing::error!(attempt, error = %error, "giving up on non-retryable error");
        return NextStep::GiveUp(RetryError::Aborted {
            attempt,
            source: error,
        });
    }
    if attempt >= max_attempts {
        tracing::error!(attempts = attempt, error = %error, "giving up after final attempt");
        return NextStep::GiveUp(RetryError::Exhausted {
            attempts: attempt,
            source: error,
        });
    }
    NextStep::Wait(config.delay_after(attempt))
}

/// Runs `operation` until it succeeds or `config.max_attempts()` attempts
/// have failed, sleeping the current thread between attempts.
///
/// # Errors
///
/// Returns [`RetryError::Exhausted`] with the last failure when every attempt
/// fails.
pub fn retry<T, E, F>(config: &RetryConfig, operation: F) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    retry_if(config, operation, |_| true)
}

/// Like [`retry`], but stops as soon as `should_retry` returns `false` for a
/// failure.
///
/// # Errors
///
/// Returns [`RetryError::Aborted`] for a rejected failure and
/// [`RetryError::Exhausted`] when every attempt fails.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use orderly::control::{retry_if, RetryConfig, RetryError};
///
/// let config = RetryConfig::new().with_interval(Duration::ZERO);
/// let result: Result<(), _> = retry_if(&config, || Err("fatal"), |error| *error != "fatal");
///
/// assert_eq!(result, Err(RetryError::Aborted { attempt: 1, source: "fatal" }));
/// ```
pub fn retry_if<T, E, F, P>(
    config: &RetryConfig,
    mut operation: F,
    mut should_retry: P,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
    E: fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation() {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => {
                let retryable = should_retry(&error);
                match after_failure(config, attempt, error, retryable) {
                    NextStep::Wait(delay) => {
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                        attempt += 1;
                    }
                    NextStep::GiveUp(retry_error) => return Err(retry_error),
                }
            }
        }
    }
}

/// Async counterpart of [`retry`]: awaits a fresh future from `operation` per
/// attempt and sleeps on the tokio timer in between.
///
/// # Errors
///
/// Returns [`RetryError::Exhausted`] with the last failure when every attempt
/// fails.
#[cfg(feature = "async")]
pub async fn retry_async<T, E, F, Fut>(
    config: &RetryConfig,
    operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    retry_async_if(config, operation, |_| true).await
}

/// Async counterpart of [`retry_if`].
///
/// # Errors
///
/// Returns [`RetryError::Aborted`] for a rejected failure and
/// [`RetryError::Exhausted`] when every attempt fails.
#[cfg(feature = "async")]
pub async fn retry_async_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    mut operation: F,
    mut should_retry: P,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    P: FnMut(&E) -> bool,
    E: fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => {
                let retryable = should_retry(&error);
                match after_failure(config, attempt, error, retryable) {
                    NextStep::Wait(delay) => {
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                        attempt += 1;
                    }
                    NextStep::GiveUp(retry_error) => return Err(retry_error),
                }
            }
        }
    }
}
