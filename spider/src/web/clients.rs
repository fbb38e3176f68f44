//! URL clients built on a [`SessionPool`].
//!
//! Status codes only matter as far as "success or not": any non-2xx
//! response becomes [`WebFetchError::Status`].

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use tracing::debug;

use super::error::WebFetchError;
use super::session::SessionPool;
use crate::client::{BoxFuture, Client, FetchError};

/// Send a GET through a session from `pool`, rejecting non-success statuses.
async fn get<P>(pool: &P, url: &str) -> Result<Response, WebFetchError>
where
    P: SessionPool + ?Sized,
{
    let session = pool.session();
    debug!(url, proxy = session.proxy().unwrap_or("none"), "GET");

    let response = session
        .client()
        .get(url)
        .send()
        .await
        .map_err(|source| WebFetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WebFetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Client returning the raw `reqwest::Response`.
///
/// Responses cannot be cloned, so this client cannot sit under a caching
/// decorator; use [`WebTextClient`] or [`WebByteClient`] for that.
pub struct WebClient<P> {
    pool: P,
}

impl<P: SessionPool> WebClient<P> {
    /// Create a client drawing sessions from `pool`.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

impl<P: SessionPool> Client<String, Response> for WebClient<P> {
    fn fetch<'a>(&'a self, url: &'a String) -> BoxFuture<'a, Result<Response, FetchError>> {
        Box::pin(async move { Ok(get(&self.pool, url).await?) })
    }
}

/// Client returning the response body as text.
pub struct WebTextClient<P> {
    pool: P,
}

impl<P: SessionPool> WebTextClient<P> {
    /// Create a client drawing sessions from `pool`.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

impl<P: SessionPool> Client<String, String> for WebTextClient<P> {
    fn fetch<'a>(&'a self, url: &'a String) -> BoxFuture<'a, Result<String, FetchError>> {
        Box::pin(async move {
            let response = get(&self.pool, url).await?;
            let text = response.text().await.map_err(|source| WebFetchError::Body {
                url: url.clone(),
                source,
            })?;
            Ok(text)
        })
    }
}

/// Client returning the response body as bytes.
pub struct WebByteClient<P> {
    pool: P,
}

impl<P: SessionPool> WebByteClient<P> {
    /// Create a client drawing sessions from `pool`.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

impl<P: SessionPool> Client<String, Bytes> for WebByteClient<P> {
    fn fetch<'a>(&'a self, url: &'a String) -> BoxFuture<'a, Result<Bytes, FetchError>> {
        Box::pin(async move {
            let response = get(&self.pool, url).await?;
            let body = response.bytes().await.map_err(|source| WebFetchError::Body {
                url: url.clone(),
                source,
            })?;
            Ok(body)
        })
    }
}

/// Client returning image bytes.
///
/// Fails with [`WebFetchError::NotAnImage`] unless the response declares an
/// `image/*` content type.
pub struct ImageClient<P> {
    pool: P,
}

impl<P: SessionPool> ImageClient<P> {
    /// Create a client drawing sessions from `pool`.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

impl<P: SessionPool> Client<String, Bytes> for ImageClient<P> {
    fn fetch<'a>(&'a self, url: &'a String) -> BoxFuture<'a, Result<Bytes, FetchError>> {
        Box::pin(async move {
            let response = get(&self.pool, url).await?;

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if !content_type.starts_with("image/") {
                return Err(WebFetchError::NotAnImage {
                    url: url.clone(),
                    content_type,
                }
                .into());
            }

            let body = response.bytes().await.map_err(|source| WebFetchError::Body {
                url: url.clone(),
                source,
            })?;
            Ok(body)
        })
    }
}
