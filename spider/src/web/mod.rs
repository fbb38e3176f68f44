//! Network-facing clients.
//!
//! These are thin adapters from a URL key to a response, its text or its
//! bytes. Every failure converts into [`FetchError::Web`](crate::client::FetchError::Web),
//! so the decorators in [`client`](crate::client) treat them like any other
//! fetch failure.
//!
//! # Example
//!
//! ```ignore
//! use spider::web::{SessionSettings, SingleSessionPool, WebTextClient};
//!
//! let pool = SingleSessionPool::with_settings(&SessionSettings::default())?;
//! let client = WebTextClient::new(pool);
//! let html = client.fetch(&"https://example.com".to_string()).await?;
//! ```

mod clients;
mod error;
mod session;

pub use clients::{ImageClient, WebByteClient, WebClient, WebTextClient};
pub use error::WebFetchError;
pub use session::{
    default_user_agent, Session, SessionPool, SessionSettings, SingleSessionPool,
    DEFAULT_TIMEOUT_SECS,
};
