//! Bounded retry client.
//!
//! # State Machine
//!
//! ```text
//! Attempting(1) ──ok──▶ Succeeded
//!      │err
//!      ▼
//! Attempting(n) ──ok──▶ Succeeded
//!      │err, n < max_attempts → Attempting(n + 1)
//!      │err, n == max_attempts
//!      ▼
//!    Failed (last error)
//! ```
//!
//! Retries are back-to-back. Earlier failures are logged and discarded;
//! only the final attempt's error reaches the caller.

use std::num::NonZeroU32;

use thiserror::Error;
use tracing::{debug, warn};

use super::{BoxFuture, Client, FetchError};

/// A retry bound of zero was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("max_attempts must be at least 1")]
pub struct ZeroAttempts;

/// Re-invokes the inner client on failure, up to a fixed number of attempts.
///
/// `max_attempts` counts the initial attempt, so a bound of 1 behaves
/// exactly like the inner client.
pub struct RetryClient<C> {
    inner: C,
    max_attempts: NonZeroU32,
}

impl<C> RetryClient<C> {
    /// Create a retry client.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroAttempts`] if `max_attempts` is 0.
    pub fn new(inner: C, max_attempts: u32) -> Result<Self, ZeroAttempts> {
        let max_attempts = NonZeroU32::new(max_attempts).ok_or(ZeroAttempts)?;
        Ok(Self::with_max_attempts(inner, max_attempts))
    }

    /// Create a retry client from an already validated bound.
    pub fn with_max_attempts(inner: C, max_attempts: NonZeroU32) -> Self {
        Self {
            inner,
            max_attempts,
        }
    }

    /// Maximum number of inner invocations per fetch.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.get()
    }
}

impl<K, V, C> Client<K, V> for RetryClient<C>
where
    K: Sync,
    V: Send + 'static,
    C: Client<K, V>,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        Box::pin(async move {
            let max_attempts = self.max_attempts.get();
            let mut attempt = 1;
            loop {
                match self.inner.fetch(key).await {
                    Ok(value) => return Ok(value),
                    Err(e) if attempt < max_attempts => {
                        debug!(attempt, max_attempts, error = %e, "Fetch failed, retrying");
                        attempt += 1;
                    }
                    Err(e) => {
                        if max_attempts > 1 {
                            warn!(max_attempts, error = %e, "Fetch failed after all attempts");
                        }
                        return Err(e);
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::client::fake::tests::{FlakyClient, SlowClient};

    #[test]
    fn test_zero_attempts_rejected() {
        let result = RetryClient::new(FlakyClient::new(1), 0);
        assert_eq!(result.err(), Some(ZeroAttempts));
    }

    #[tokio::test]
    async fn test_retry_client_not_enough_tries() {
        let inner = Arc::new(FlakyClient::new(4));
        let client = RetryClient::new(inner.clone(), 3).unwrap();

        let err = client.fetch(&"key".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "fetch failed: attempt 3");
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test]
    async fn test_retry_client_enough_tries() {
        let inner = Arc::new(FlakyClient::new(4));
        let client = RetryClient::new(inner.clone(), 4).unwrap();

        assert_eq!(client.fetch(&"key".to_string()).await.unwrap(), "key#4");
        assert_eq!(inner.calls(), 4);
    }

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let inner = Arc::new(FlakyClient::new(2));
        let client = RetryClient::new(inner.clone(), 10).unwrap();

        assert_eq!(client.fetch(&"key".to_string()).await.unwrap(), "key#2");
        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_single_attempt_is_passthrough() {
        let inner = Arc::new(FlakyClient::new(2));
        let client = RetryClient::new(inner.clone(), 1).unwrap();

        let err = client.fetch(&"key".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "fetch failed: attempt 1");
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_fetch_stops_retrying() {
        let inner = Arc::new(SlowClient::new(Duration::from_secs(5)));
        let client = RetryClient::new(inner.clone(), 5).unwrap();

        let key = "slow".to_string();
        let result = tokio::time::timeout(Duration::from_millis(20), client.fetch(&key)).await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(inner.calls(), 1);
    }

    fn run<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    proptest! {
        #[test]
        fn prop_attempts_never_exceed_bound(succeed_on in 1u32..20, max_attempts in 1u32..20) {
            let inner = Arc::new(FlakyClient::new(succeed_on));
            let client = RetryClient::new(inner.clone(), max_attempts).unwrap();

            let result = run(client.fetch(&"key".to_string()));

            if succeed_on <= max_attempts {
                prop_assert!(result.is_ok());
                prop_assert_eq!(inner.calls(), succeed_on);
            } else {
                let err = result.unwrap_err();
                prop_assert_eq!(err.to_string(), format!("fetch failed: attempt {}", max_attempts));
                prop_assert_eq!(inner.calls(), max_attempts);
            }
        }
    }
}
