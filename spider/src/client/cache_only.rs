//! Cache-only client.
//!
//! Serves strictly from the cache. A miss is reported as a plain
//! [`FetchError`], the same as any other failure to produce a value.

use tracing::trace;

use super::{BoxFuture, Client, FetchError};
use crate::cache::Cache;

/// Read-only view of a cache as a client.
///
/// Never performs I/O and never writes to the cache. Values appear once
/// some other party (a [`CacheClient`](super::CacheClient),
/// [`CacheSkipClient`](super::CacheSkipClient) or a direct
/// [`Cache::set`]) has stored them.
pub struct CacheOnlyClient<S> {
    cache: S,
}

impl<S> CacheOnlyClient<S> {
    /// Create a cache-only client over `cache`.
    pub fn new(cache: S) -> Self {
        Self { cache }
    }
}

impl<K, V, S> Client<K, V> for CacheOnlyClient<S>
where
    K: Sync,
    V: Send + 'static,
    S: Cache<K, V>,
{
    fn fetch<'a>(&'a self, key: &'a K) -> BoxFuture<'a, Result<V, FetchError>> {
        Box::pin(async move {
            match self.cache.get(key) {
                Some(value) => Ok(value),
                None => {
                    trace!("Cache-only miss");
                    Err(FetchError::failed("not in cache"))
                }
            }
        })
    }
}
