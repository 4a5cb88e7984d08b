//! Retry with exponential backoff for provider calls.
//!
//! The orchestrator itself never retries; transient-failure handling lives in
//! the provider, which wraps its HTTP round trip in [`with_retry_if`] so only
//! errors its predicate marks as transient (429, 5xx, network) are repeated.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the delay between retries.
    pub max_delay: Duration,
    /// Backoff multiplier applied per retry.
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    /// Preset for remote API calls: 3 attempts, 1s then 2s between them.
    pub fn api_call() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }

    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi((attempt - 1) as i32);
        Duration::from_millis(delay_ms as u64).min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::api_call()
    }
}

/// Run an async operation, retrying errors the predicate accepts.
///
/// Errors rejected by `should_retry` (e.g. 4xx client errors) fail
/// immediately; accepted errors are retried until attempts run out, with the
/// last error returned.
///
/// # Panics
/// Panics if `config.max_attempts` is 0.
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    assert!(
        config.max_attempts >= 1,
        "RetryConfig.max_attempts must be >= 1, got {}",
        config.max_attempts
    );

    let mut last_error: Option<E> = None;

    for attempt in 0..config.max_attempts {
        let delay = config.delay_for_attempt(attempt);
        if !delay.is_zero() {
            debug!(
                "{}: retry {}/{} after {:?}",
                operation_name,
                attempt + 1,
                config.max_attempts,
                delay
            );
            sleep(delay).await;
        }

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if !should_retry(&e) {
                    debug!("{}: error is not retryable: {}", operation_name, e);
                    return Err(e);
                }
                let remaining = config.max_attempts - attempt - 1;
                warn!(
                    "{}: attempt {}/{} failed ({}), {} retries remaining",
                    operation_name,
                    attempt + 1,
                    config.max_attempts,
                    e,
                    remaining
                );
                last_error = Some(e);
            }
        }
    }

    Err(last_error.expect("at least one attempt was made"))
}
