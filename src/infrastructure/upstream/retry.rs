//! Retry with exponential backoff for upstream calls.
//!
//! The policy is independent of any I/O mechanism: it wraps an arbitrary
//! fallible async operation, so it is unit-testable with a fake operation and
//! reusable if another upstream ever appears.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

/// Attempt budget and backoff schedule for a retried operation.
///
/// The delay before attempt `k` (for `k >= 2`) is
/// `base_delay * multiplier^(k-2)`: with the upstream defaults of 5 attempts,
/// 2000 ms and a multiplier of 2, the inter-attempt delays are 2 s, 4 s, 8 s
/// and 16 s.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: f64,
}

impl RetryPolicy {
    /// Policy for the fact provider: 5 attempts, 2 s base delay, doubling.
    #[must_use]
    pub fn upstream() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(2000),
            multiplier: 2.0,
        }
    }

    /// Fast policy for tests (minimal delays).
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1),
            multiplier: 2.0,
        }
    }

    /// Delay inserted before attempt number `attempt` (1-indexed).
    fn delay_before(&self, attempt: u32) -> Duration {
        debug_assert!(attempt >= 2);
        self.base_delay
            .mul_f64(self.multiplier.powi(attempt as i32 - 2))
    }
}

/// Runs `operation` under `policy`, sleeping between attempts.
///
/// Every failure is retried until the attempt budget is spent; the last error
/// is then returned unchanged, so the caller sees the final classified
/// failure rather than a retry-specific wrapper.
pub async fn retry_with_backoff<F, Fut, T, E>(
    operation_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(operation = operation_name, attempt, "succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) => {
                if attempt >= policy.max_attempts {
                    warn!(
                        operation = operation_name,
                        attempt,
                        error = %err,
                        "retry budget exhausted"
                    );
                    return Err(err);
                }

                let delay = policy.delay_before(attempt + 1);
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    ?delay,
                    "attempt failed, backing off"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct TestError(&'static str);

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success_needs_no_delay() {
        let result: Result<i32, TestError> =
            retry_with_backoff("op", &RetryPolicy::test(), || async { Ok(42) }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_succeeds_on_fifth_attempt() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let result: Result<i32, TestError> =
            retry_with_backoff("op", &RetryPolicy::test(), || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    if n < 5 { Err(TestError("503")) } else { Ok(7) }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(attempts.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let result: Result<i32, TestError> =
            retry_with_backoff("op", &RetryPolicy::test(), || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(TestError("429"))
                }
            })
            .await;

        assert_eq!(result.unwrap_err().0, "429");
        assert_eq!(attempts.load(Ordering::SeqCst), 5);
    }

    // Paused clock: sleeps auto-advance virtual time, so the exact
    // 2-4-8-16 s schedule is observable without waiting.
    #[tokio::test(start_paused = true)]
    async fn test_backoff_follows_doubling_schedule() {
        let starts = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = starts.clone();

        let result: Result<i32, TestError> =
            retry_with_backoff("op", &RetryPolicy::upstream(), || {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push(tokio::time::Instant::now());
                    Err(TestError("503"))
                }
            })
            .await;

        assert!(result.is_err());

        let starts = starts.lock().unwrap();
        assert_eq!(starts.len(), 5);

        let gaps: Vec<Duration> = starts.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(
            gaps,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
                Duration::from_secs(16),
            ]
        );
    }
}
