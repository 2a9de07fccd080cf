#![cfg(feature = "control")]
//! Tests for the retry helpers.
//!
//! Synchronous tests run with a zero interval; async tests run on a paused
//! tokio clock so backoff delays are observed without real waiting.

use std::cell::Cell;
use std::time::{Duration, Instant};

use orderly::control::{Backoff, RetryConfig, RetryError, retry, retry_if};
use rstest::rstest;

fn immediate(max_attempts: u32) -> RetryConfig {
    RetryConfig::new()
        .with_max_attempts(max_attempts)
        .with_interval(Duration::ZERO)
}

// =============================================================================
// Configuration
// =============================================================================

#[rstest]
fn test_default_config() {
    let config = RetryConfig::default();
    assert_eq!(config.max_attempts(), 3);
    assert_eq!(config.interval(), Duration::from_secs(1));
    assert!(matches!(config.backoff(), Backoff::Fixed));
}

#[rstest]
#[case(Backoff::Fixed, 3, 100)]
#[case(Backoff::Linear, 3, 300)]
#[case(Backoff::Exponential, 3, 400)]
#[case(Backoff::Exponential, 1, 100)]
fn test_delay_after(#[case] backoff: Backoff, #[case] attempt: u32, #[case] expected_millis: u64) {
    let config = RetryConfig::new()
        .with_interval(Duration::from_millis(100))
        .with_backoff(backoff);
    assert_eq!(config.delay_after(attempt), Duration::from_millis(expected_millis));
}

#[rstest]
fn test_custom_backoff() {
    let config = RetryConfig::new()
        .with_interval(Duration::from_millis(10))
        .with_backoff(Backoff::custom(|attempt, interval| interval * attempt * attempt));
    assert_eq!(config.delay_after(3), Duration::from_millis(90));
}

// =============================================================================
// Synchronous Retry
// =============================================================================

#[rstest]
fn test_success_on_first_attempt_runs_once() {
    let calls = Cell::new(0);
    let result: Result<i32, RetryError<String>> = retry(&immediate(3), || {
        calls.set(calls.get() + 1);
        Ok(7)
    });
    assert_eq!(result, Ok(7));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_succeeds_after_transient_failures() {
    let calls = Cell::new(0);
    let result = retry(&immediate(5), || {
        calls.set(calls.get() + 1);
        if calls.get() < 3 {
            Err(format!("attempt {} failed", calls.get()))
        } else {
            Ok("done")
        }
    });
    assert_eq!(result, Ok("done"));
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn test_exhaustion_returns_last_error() {
    let calls = Cell::new(0);
    let result: Result<(), _> = retry(&immediate(3), || {
        calls.set(calls.get() + 1);
        Err(format!("failure {}", calls.get()))
    });

    let error = result.unwrap_err();
    assert!(error.is_exhausted());
    assert_eq!(error.attempts(), 3);
    assert_eq!(error.last_error(), "failure 3");
    assert_eq!(error.into_inner(), "failure 3");
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn test_zero_max_attempts_runs_once() {
    let calls = Cell::new(0);
    let result: Result<(), _> = retry(&immediate(0), || {
        calls.set(calls.get() + 1);
        Err("nope")
    });
    assert_eq!(result, Err(RetryError::Exhausted { attempts: 1, source: "nope" }));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_retry_if_stops_on_rejected_error() {
    let calls = Cell::new(0);
    let result: Result<(), _> = retry_if(
        &immediate(5),
        || {
            calls.set(calls.get() + 1);
            if calls.get() == 1 { Err("transient") } else { Err("fatal") }
        },
        |error| *error == "transient",
    );

    assert_eq!(result, Err(RetryError::Aborted { attempt: 2, source: "fatal" }));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_no_delay_after_final_attempt() {
    let config = RetryConfig::new()
        .with_max_attempts(1)
        .with_interval(Duration::from_secs(60));
    let started = Instant::now();
    let result: Result<(), _> = retry(&config, || Err("once"));

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(30));
}

#[rstest]
fn test_waits_between_attempts() {
    let config = RetryConfig::new()
        .with_max_attempts(3)
        .with_interval(Duration::from_millis(5));
    let started = Instant::now();
    let result: Result<(), _> = retry(&config, || Err("always"));

    assert!(result.is_err());
    assert!(started.elapsed() >= Duration::from_millis(10));
}

// =============================================================================
// Async Retry
// =============================================================================

#[cfg(feature = "async")]
mod async_retry {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use orderly::control::{Backoff, RetryConfig, RetryError, retry_async, retry_async_if};

    #[tokio::test(start_paused = true)]
    async fn test_async_retry_applies_exponential_backoff() {
        let config = RetryConfig::new()
            .with_max_attempts(4)
            .with_interval(Duration::from_millis(100))
            .with_backoff(Backoff::Exponential);
        let calls = Arc::new(AtomicU32::new(0));
        let started = tokio::time::Instant::now();

        let counter = Arc::clone(&calls);
        let result: Result<(), _> = retry_async(&config, || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("unavailable")
            }
        })
        .await;

        assert_eq!(result, Err(RetryError::Exhausted { attempts: 4, source: "unavailable" }));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        // 100 + 200 + 400, nothing after the fourth attempt
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(700));
        assert!(elapsed < Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_retry_returns_first_success() {
        let config = RetryConfig::new().with_interval(Duration::from_secs(1));
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        let result = retry_async(&config, || {
            let counter = Arc::clone(&counter);
            async move {
                let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 2 { Err("warming up") } else { Ok(attempt) }
            }
        })
        .await;

        assert_eq!(result, Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_retry_if_aborts_without_waiting() {
        let config = RetryConfig::new().with_interval(Duration::from_secs(10));
        let started = tokio::time::Instant::now();

        let result: Result<(), _> =
            retry_async_if(&config, || async { Err("forbidden") }, |_| false).await;

        assert_eq!(result, Err(RetryError::Aborted { attempt: 1, source: "forbidden" }));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
