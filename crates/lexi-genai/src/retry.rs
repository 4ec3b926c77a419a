//! Bounded exponential-backoff retry for generative requests.

use lexi_config::RetryConfig;
use std::future::Future;
use std::time::Duration;

use crate::error::GenAiError;

/// Retry behaviour for transient generative failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    ///
    /// # Errors
    ///
    /// Returns the first non-transient error unchanged, or
    /// [`GenAiError::RetriesExhausted`] wrapping the last transient error once
    /// more than one attempt has been spent.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, GenAiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GenAiError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut delay = self.base_delay;
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        ?delay,
                        error = %e,
                        "transient generative error, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = std::cmp::min(delay * 2, self.max_delay);
                    attempt += 1;
                }
                Err(e) if e.is_transient() && max_attempts > 1 => {
                    return Err(GenAiError::RetriesExhausted {
                        attempts: max_attempts,
                        last: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    fn server_error() -> GenAiError {
        GenAiError::Api {
            status: 503,
            message: "overloaded".into(),
        }
    }

    #[test]
    fn from_config_clamps_attempts() {
        let policy = RetryPolicy::from(&RetryConfig {
            max_attempts: 0,
            base_delay_ms: 250,
            max_delay_ms: 1_000,
        });
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = &AtomicU32::new(0);
        let result = fast(3)
            .run(move || async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(server_error())
                } else {
                    Ok("noun")
                }
            })
            .await;
        assert_eq!(result.unwrap(), "noun");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_attempts() {
        let calls = &AtomicU32::new(0);
        let err = fast(2)
            .run(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(server_error())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::RetriesExhausted { attempts: 2, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn permanent_error_not_retried() {
        let calls = &AtomicU32::new(0);
        let err = fast(5)
            .run(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(GenAiError::Api {
                    status: 401,
                    message: "invalid api key".into(),
                })
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Api { status: 401, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn single_attempt_returns_error_unwrapped() {
        let err = RetryPolicy::none()
            .run(|| async { Err::<(), _>(server_error()) })
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Api { status: 503, .. }));
    }
}
