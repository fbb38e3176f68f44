//! Fetch clients and the decorators that compose them.
//!
//! Every type here implements the single-operation [`Client`] contract, so
//! decorators wrap each other freely. Control flows from the outermost
//! decorator inward; values flow back outward.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  RetryClient                 │  re-invokes inner up to max_attempts
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐     ┌──────────────────────┐
//! │  CacheClient / CacheSkip     │────▶│  Cache<K, V>         │
//! └──────────────┬───────────────┘     │  (shared via Arc)    │
//!                ▼                     └──────────▲───────────┘
//! ┌──────────────────────────────┐                │
//! │  WebByteClient, FakeClient.. │     CacheOnlyClient reads only
//! └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use spider::cache::MemoryCache;
//! use spider::client::{CacheClient, Client, FakeClient, RetryClient};
//!
//! let cache = Arc::new(MemoryCache::new(1_000, None));
//! let client = RetryClient::new(CacheClient::new(FakeClient, cache), 3)?;
//!
//! assert_eq!(client.fetch(&"key".to_string()).await?, "key");
//! ```

mod cache;
mod cache_only;
mod cache_skip;
mod error;
mod fake;
mod retry;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub use cache::CacheClient;
pub use cache_only::CacheOnlyClient;
pub use cache_skip::CacheSkipClient;
pub use error::FetchError;
pub use fake::FakeClient;
pub use retry::{RetryClient, ZeroAttempts};

use crate::cache::Cache;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Retrieves a value for a key.
///
/// Implementations may suspend while awaiting I/O. `fetch` must be safe to
/// call repeatedly for the same key, since [`RetryClient`] relies on it.
///
/// # Dyn Compatibility
///
/// `fetch` returns a [`BoxFuture`] so clients can be used as trait objects
/// (`Arc<dyn Client<K, V>>`), which lets one fetcher back several decorators.
pub trait Client<K, V>: Send + Sync {
    /// Fetch the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when no value could be produced.
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>>;
}

impl<K, V, C> Client<K, V> for Arc<C>
where
    C: Client<K, V> + ?Sized,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        (**self).fetch(key)
    }
}

impl<K, V, C> Client<K, V> for Box<C>
where
    C: Client<K, V> + ?Sized,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        (**self).fetch(key)
    }
}

impl<K, V, C> Client<K, V> for &C
where
    C: Client<K, V> + ?Sized,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        (**self).fetch(key)
    }
}

/// Fluent composition of decorators around any client.
///
/// ```ignore
/// let client = WebByteClient::new(pool).cached(cache).retry(3)?;
/// ```
pub trait ClientExt<K, V>: Client<K, V> + Sized {
    /// Wrap in a cache-through [`CacheClient`].
    fn cached<S>(self, cache: S) -> CacheClient<Self, S>
    where
        S: Cache<K, V>,
    {
        CacheClient::new(self, cache)
    }

    /// Wrap in a [`CacheSkipClient`] that always fetches and records results.
    fn cache_skip<S>(self, cache: S) -> CacheSkipClient<Self, S>
    where
        S: Cache<K, V>,
    {
        CacheSkipClient::new(self, cache)
    }

    /// Wrap in a [`RetryClient`] allowing `max_attempts` invocations.
    fn retry(self, max_attempts: u32) -> Result<RetryClient<Self>, ZeroAttempts> {
        RetryClient::new(self, max_attempts)
    }

    /// Erase the concrete client type.
    fn boxed(self) -> Box<dyn Client<K, V>>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<K, V, C> ClientExt<K, V> for C where C: Client<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::client::fake::tests::CountingClient;

    #[tokio::test]
    async fn test_arc_client_is_shared() {
        let inner: Arc<dyn Client<String, String>> = Arc::new(FakeClient);
        let cache_a: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100, None));
        let cache_b: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100, None));
        let a = CacheClient::new(inner.clone(), cache_a);
        let b = CacheClient::new(inner, cache_b);

        let key = "shared".to_string();
        assert_eq!(a.fetch(&key).await.unwrap(), "shared");
        assert_eq!(b.fetch(&key).await.unwrap(), "shared");
    }

    #[tokio::test]
    async fn test_borrowed_client_is_wrapped() {
        let inner = CountingClient::default();
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100, None));
        let client = CacheClient::new(&inner, cache.clone());

        let key = "borrowed".to_string();
        assert_eq!(client.fetch(&key).await.unwrap(), "borrowed#1");
        assert_eq!(client.fetch(&key).await.unwrap(), "borrowed#1");
        assert_eq!(inner.calls(), 1);
        assert_eq!(cache.get(&key), Some("borrowed#1".to_string()));
    }

    #[tokio::test]
    async fn test_fluent_composition() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100, None));
        let client = FakeClient.cached(cache.clone()).retry(2).unwrap();

        let key = "fluent".to_string();
        assert_eq!(client.fetch(&key).await.unwrap(), "fluent");
        assert_eq!(cache.get(&key), Some("fluent".to_string()));
        assert_eq!(client.max_attempts(), 2);
    }

    #[tokio::test]
    async fn test_boxed_client() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100, None));
        let client: Box<dyn Client<String, String>> = FakeClient.cache_skip(cache).boxed();

        let key = "boxed".to_string();
        assert_eq!(client.fetch(&key).await.unwrap(), "boxed");
    }
}
