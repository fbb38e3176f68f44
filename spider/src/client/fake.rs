//! Identity client for tests and wiring checks.

use super::{BoxFuture, Client, FetchError};

/// Client that returns the key as the value.
///
/// Never fails and performs no I/O, which makes it handy for checking how
/// decorators are wired together.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeClient;

impl<K> Client<K, K> for FakeClient
where
    K: Clone + Send + Sync,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<K, FetchError>> {
        Box::pin(async move { Ok(key.clone()) })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use super::*;

    /// Client returning `"{key}#{n}"` where `n` counts invocations.
    #[derive(Default)]
    pub struct CountingClient {
        calls: AtomicU32,
    }

    impl CountingClient {
        pub fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Client<String, String> for CountingClient {
        fn fetch<'a>(&'a self, key: &'a String) -> BoxFuture<'a, Result<String, FetchError>> {
            Box::pin(async move {
                let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(format!("{}#{}", key, n))
            })
        }
    }

    /// Client failing until its `succeed_on`-th invocation.
    ///
    /// Failures carry the attempt number so callers can tell which one
    /// surfaced.
    pub struct FlakyClient {
        succeed_on: u32,
        calls: AtomicU32,
    }

    impl FlakyClient {
        pub fn new(succeed_on: u32) -> Self {
            Self {
                succeed_on,
                calls: AtomicU32::new(0),
            }
        }

        pub fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Client<String, String> for FlakyClient {
        fn fetch<'a>(&'a self, key: &'a String) -> BoxFuture<'a, Result<String, FetchError>> {
            Box::pin(async move {
                let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n >= self.succeed_on {
                    Ok(format!("{}#{}", key, n))
                } else {
                    Err(FetchError::failed(format!("attempt {}", n)))
                }
            })
        }
    }

    /// Client that sleeps before answering.
    pub struct SlowClient {
        delay: Duration,
        calls: AtomicU32,
    }

    impl SlowClient {
        pub fn new(delay: Duration) -> Self {
            Self {
                delay,
                calls: AtomicU32::new(0),
            }
        }

        pub fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Client<String, String> for SlowClient {
        fn fetch<'a>(&'a self, key: &'a String) -> BoxFuture<'a, Result<String, FetchError>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(self.delay).await;
                Ok(key.clone())
            })
        }
    }

    #[tokio::test]
    async fn test_fake_client_returns_key() {
        let key = "key".to_string();
        assert_eq!(FakeClient.fetch(&key).await.unwrap(), key);
    }

    #[tokio::test]
    async fn test_fake_client_any_key_type() {
        assert_eq!(FakeClient.fetch(&42u64).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_flaky_client_counts_attempts() {
        let client = FlakyClient::new(3);
        let key = "key".to_string();

        assert!(client.fetch(&key).await.is_err());
        assert!(client.fetch(&key).await.is_err());
        assert_eq!(client.fetch(&key).await.unwrap(), "key#3");
        assert_eq!(client.calls(), 3);
    }
}
