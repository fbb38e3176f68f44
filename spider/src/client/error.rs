//! Fetch failure taxonomy.
//!
//! Every client fails with [`FetchError`]. Decorators never inspect the
//! variant to decide whether to retry or cache; any error means "no value
//! could be produced for this key".

use thiserror::Error;

use crate::web::WebFetchError;

/// Errors produced by [`Client::fetch`](super::Client::fetch).
#[derive(Debug, Error)]
pub enum FetchError {
    /// No value could be produced for the key.
    #[error("fetch failed: {0}")]
    Failed(String),

    /// A network-facing client failed.
    #[error(transparent)]
    Web(#[from] WebFetchError),

    /// Failure raised by a user-provided client.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Create a generic fetch failure with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Wrap an arbitrary error raised by a custom client.
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Returns true if this failure came from a network-facing client.
    pub fn is_web(&self) -> bool {
        matches!(self, Self::Web(_))
    }
}
