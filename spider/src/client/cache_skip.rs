//! Cache-skip client.
//!
//! Always fetches fresh, ignoring any cached entry, and records successful
//! results so other readers of the same cache see the new value.

use tracing::trace;

use super::{BoxFuture, Client, FetchError};
use crate::cache::Cache;

/// Write-only cache decorator.
pub struct CacheSkipClient<C, S> {
    inner: C,
    cache: S,
}

impl<C, S> CacheSkipClient<C, S> {
    /// Create a new cache-skip client.
    ///
    /// # Arguments
    ///
    /// * `inner` - The client invoked on every fetch
    /// * `cache` - The cache overwritten with each successful result
    pub fn new(inner: C, cache: S) -> Self {
        Self { inner, cache }
    }
}

impl<K, V, C, S> Client<K, V> for CacheSkipClient<C, S>
where
    K: Clone + Send + Sync,
    V: Clone + Send + 'static,
    C: Client<K, V>,
    S: Cache<K, V>,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        Box::pin(async move {
            let value = self.inner.fetch(key).await?;
            trace!("Refreshing cache entry");
            self.cache.set(key.clone(), value.clone());
            Ok(value)
        })
    }
}
