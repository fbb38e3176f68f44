//! HTTP sessions and the pools that hand them out.
//!
//! A [`Session`] pairs a `reqwest::Client` (which owns the connection pool)
//! with the proxy it was built for. Clients ask a [`SessionPool`] for a
//! session on every request, so a pool can rotate proxies without the
//! clients knowing.

use std::sync::Arc;
use std::time::Duration;

use super::error::WebFetchError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings used to build a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Total request timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Proxy URL for all requests. `None` disables proxies entirely,
    /// including the ones from the environment.
    pub proxy: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

/// Default `User-Agent`: `spider/<version>`.
pub fn default_user_agent() -> String {
    format!("spider/{}", env!("CARGO_PKG_VERSION"))
}

/// An HTTP client bound to an optional proxy.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Session {
    proxy: Option<String>,
    client: reqwest::Client,
}

impl Session {
    /// Build a session from settings.
    pub fn new(settings: &SessionSettings) -> Result<Self, WebFetchError> {
        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str());

        builder = match &settings.proxy {
            Some(proxy) => {
                let proxy_config =
                    reqwest::Proxy::all(proxy.as_str()).map_err(|source| WebFetchError::Proxy {
                        proxy: proxy.clone(),
                        source,
                    })?;
                builder.proxy(proxy_config)
            }
            None => builder.no_proxy(),
        };

        let client = builder.build().map_err(WebFetchError::Build)?;

        Ok(Self {
            proxy: settings.proxy.clone(),
            client,
        })
    }

    /// Proxy this session sends requests through, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Source of sessions for the web clients.
pub trait SessionPool: Send + Sync {
    /// Get a session for the next request.
    fn session(&self) -> Session;
}

impl<P> SessionPool for Arc<P>
where
    P: SessionPool + ?Sized,
{
    fn session(&self) -> Session {
        (**self).session()
    }
}

/// Pool that always hands out the same session.
#[derive(Debug, Clone)]
pub struct SingleSessionPool {
    session: Session,
}

impl SingleSessionPool {
    /// Create a pool with default settings.
    pub fn new() -> Result<Self, WebFetchError> {
        Self::with_settings(&SessionSettings::default())
    }

    /// Create a pool from explicit settings.
    pub fn with_settings(settings: &SessionSettings) -> Result<Self, WebFetchError> {
        Ok(Self {
            session: Session::new(settings)?,
        })
    }
}

impl SessionPool for SingleSessionPool {
    fn session(&self) -> Session {
        self.session.clone()
    }
}
