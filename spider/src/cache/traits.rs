//! Core trait for cache backends.
//!
//! # Design Principles
//!
//! - **Generic keys and values**: the clients never inspect either
//! - **Minimal interface**: presence lookup and overwrite, nothing else
//! - **Synchronous and infallible**: a backend that cannot answer reports
//!   a miss rather than an error
//! - **Shareable**: `Arc<T>` is a cache whenever `T` is, so one backend can
//!   serve several clients and give cross-path hits

use std::sync::Arc;

/// Key-value store used by the caching clients.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` and safe for concurrent `get` and
/// `set` calls; the clients add no locking of their own.
pub trait Cache<K, V>: Send + Sync {
    /// Look up a value.
    ///
    /// Returns `None` when the key is absent.
    fn get(&self, key: &K) -> Option<V>;

    /// Store a value, replacing any existing entry for the key.
    fn set(&self, key: K, value: V);
}

impl<K, V, T> Cache<K, V> for Arc<T>
where
    T: Cache<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: K, value: V) {
        (**self).set(key, value)
    }
}
