//! Web fetch errors.

use thiserror::Error;

/// Errors raised by the network-facing clients.
#[derive(Debug, Error)]
pub enum WebFetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The configured proxy URL was rejected.
    #[error("Invalid proxy '{proxy}': {source}")]
    Proxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent or timed out.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read or decoded.
    #[error("Failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An image was expected but the response was something else.
    #[error("Response from {url} is not an image (content type: {content_type})")]
    NotAnImage { url: String, content_type: String },
}
