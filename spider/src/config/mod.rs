//! INI configuration file.
//!
//! The file lives at `<config dir>/spider/config.ini` (see
//! [`config_file_path`]) and every setting is optional:
//!
//! ```ini
//! [client]
//! timeout_secs = 30
//! user_agent = spider/0.3.0
//! proxy =
//!
//! [retry]
//! max_attempts = 3
//!
//! [cache]
//! max_entries = 10000
//! ttl_secs =
//! ```
//!
//! Empty values mean "not set". A missing file yields the defaults.

mod error;
mod keys;

use std::fs;
use std::io;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::Ini;
use tracing::debug;

pub use error::ConfigError;
pub use keys::ConfigKey;

use crate::web::{default_user_agent, SessionSettings, DEFAULT_TIMEOUT_SECS};

/// Default number of attempts per fetch.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default memory cache capacity in entries.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Path of the user configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spider")
        .join("config.ini")
}

/// `[client]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header.
    pub user_agent: String,
    /// Proxy URL for all requests.
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

/// `[retry]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Attempts per fetch, including the first. Always at least 1.
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of cached entries.
    pub max_entries: u64,
    /// Entry time-to-live in seconds.
    pub ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl_secs: None,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub client: ClientConfig,
    pub retry: RetryConfig,
    pub cache: CacheConfig,
}

impl ConfigFile {
    /// Load from [`config_file_path`], falling back to defaults if the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from an explicit path, falling back to defaults if the file does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let ini = Ini::load_from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_ini(&ini)
    }

    /// Build a config from parsed INI data. Unknown keys are ignored.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }

        Ok(config)
    }

    /// Render every setting as INI data.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini
    }

    /// Save to [`config_file_path`].
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.to_ini().write_to_file(path)?;
        Ok(())
    }

    /// Session settings for the web clients.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            timeout: Duration::from_secs(self.client.timeout_secs),
            user_agent: self.client.user_agent.clone(),
            proxy: self.client.proxy.clone(),
        }
    }

    /// Retry bound, clamped to at least one attempt.
    pub fn max_attempts(&self) -> NonZeroU32 {
        NonZeroU32::new(self.retry.max_attempts).unwrap_or(NonZeroU32::MIN)
    }

    /// Cache entry time-to-live.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache.ttl_secs.map(Duration::from_secs)
    }
}
