//! Spider - composable fetch clients
//!
//! A [`Client`](client::Client) turns a key (usually a URL) into a value.
//! Decorators add caching and retry policies around any client without
//! changing call sites, and nest in any order:
//!
//! ```ignore
//! use std::sync::Arc;
//! use spider::cache::MemoryCache;
//! use spider::client::ClientExt;
//! use spider::web::{SingleSessionPool, WebByteClient};
//!
//! let cache = Arc::new(MemoryCache::new(10_000, None));
//! let client = WebByteClient::new(SingleSessionPool::new()?)
//!     .cached(cache)
//!     .retry(3)?;
//!
//! let body = client.fetch(&"https://example.com".to_string()).await?;
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod web;

pub use cache::{Cache, MemoryCache};
pub use client::{
    BoxFuture, CacheClient, CacheOnlyClient, CacheSkipClient, Client, ClientExt, FakeClient,
    FetchError, RetryClient, ZeroAttempts,
};
pub use web::WebFetchError;
