//! Cache-through client.
//!
//! Reads the cache first and only invokes the inner client on a miss.
//! Successful fetches are written back; failures are never cached.
//!
//! Concurrent misses for the same key are not coalesced: both callers hit
//! the inner client and the later write wins.

use tracing::trace;

use super::{BoxFuture, Client, FetchError};
use crate::cache::Cache;

/// Cache-through decorator.
///
/// After one successful fetch of a key, further fetches of that key are
/// served from the cache without touching the inner client.
pub struct CacheClient<C, S> {
    inner: C,
    cache: S,
}

impl<C, S> CacheClient<C, S> {
    /// Create a new cache-through client.
    ///
    /// # Arguments
    ///
    /// * `inner` - The client used on cache misses
    /// * `cache` - The cache to read and populate (usually an `Arc` shared
    ///   with other clients)
    pub fn new(inner: C, cache: S) -> Self {
        Self { inner, cache }
    }
}

impl<K, V, C, S> Client<K, V> for CacheClient<C, S>
where
    K: Clone + Send + Sync,
    V: Clone + Send + 'static,
    C: Client<K, V>,
    S: Cache<K, V>,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        Box::pin(async move {
            if let Some(value) = self.cache.get(key) {
                trace!("Cache hit");
                return Ok(value);
            }

            trace!("Cache miss, fetching");
            let value = self.inner.fetch(key).await?;
            self.cache.set(key.clone(), value.clone());
            Ok(value)
        })
    }
}
