//! Outcome type - a value or the error that prevented it.
//!
//! This module provides [`Outcome<T, E>`], a tagged result that is either a
//! `Success(T)` or a `Failure(E)`. Next to the usual predicates it offers
//! fallback accessors that substitute a default, a computed default, or the
//! value of an alternative outcome when the original one failed.
//!
//! A fallback is never evaluated for a successful outcome: closures passed to
//! [`Outcome::value_or_else`], [`Outcome::value_or_alternative`] and
//! [`Outcome::value_or_raise`] run only on `Failure`.
//!
//! # Examples
//!
//! ```rust
//! use orderly::control::Outcome;
//!
//! fn parse(value: i32) -> Outcome<i32, String> {
//!     if value < 0 {
//!         Outcome::failure(format!("invalid value: {value}"))
//!     } else {
//!         Outcome::success(value)
//!     }
//! }
//!
//! assert!(parse(1).is_success());
//! assert_eq!(parse(1).value(), Some(&1));
//!
//! let failed = parse(-1);
//! assert!(failed.is_failure());
//! assert_eq!(failed.error().map(String::as_str), Some("invalid value: -1"));
//! assert_eq!(failed.value_or(10), 10);
//! ```

use std::fmt;

/// A value of type `T`, or an error of type `E` explaining its absence.
///
/// `is_success` holds exactly when no error is recorded.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds an outcome from a value and an optional error.
    ///
    /// A recorded error wins: the value is dropped and the outcome is a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::control::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::from_parts(1, None);
    /// assert_eq!(ok, Outcome::Success(1));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::from_parts(1, Some("boom"));
    /// assert_eq!(failed, Outcome::Failure("boom"));
    /// ```
    #[inline]
    pub fn from_parts(value: T, error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Failure(error),
            None => Self::Success(value),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if no error is recorded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if an error is recorded.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the value, if successful.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, if failed.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into an `Option<T>`, discarding any error.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option<E>`, discarding any value.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Fallback Accessors
    // =========================================================================

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the error on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::control::Outcome;
    ///
    /// let failed: Outcome<usize, String> = Outcome::failure("four".to_string());
    /// assert_eq!(failed.value_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(&E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(&error),
        }
    }

    /// Returns the value, or the value of an alternative outcome computed on
    /// failure.
    ///
    /// When the alternative fails too, its error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::control::Outcome;
    ///
    /// let primary: Outcome<i32, &str> = Outcome::failure("cache miss");
    /// let value = primary.value_or_alternative(|_| Outcome::success(7));
    /// assert_eq!(value, Ok(7));
    ///
    /// let primary: Outcome<i32, &str> = Outcome::failure("cache miss");
    /// let value = primary.value_or_alternative(|_| Outcome::failure("backend down"));
    /// assert_eq!(value, Err("backend down"));
    /// ```
    #[inline]
    pub fn value_or_alternative<F>(self, alternative: F) -> Result<T, E>
    where
        F: FnOnce(&E) -> Self,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => alternative(&error).into_result(),
        }
    }

    /// Returns the value, or converts the error with `raise` on failure.
    #[inline]
    pub fn value_or_raise<F, G>(self, raise: G) -> Result<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(raise(error)),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to a successful value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the error.
    #[inline]
    pub fn map_error<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains a fallible step onto a successful value.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Collapses both cases into one value.
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the value, or `T::default()` on failure.
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
