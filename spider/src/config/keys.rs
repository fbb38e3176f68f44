//! Addressable `section.key` settings for get/set/list.

use std::fmt;
use std::str::FromStr;

use super::{ConfigError, ConfigFile};

/// A single setting in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ClientTimeoutSecs,
    ClientUserAgent,
    ClientProxy,
    RetryMaxAttempts,
    CacheMaxEntries,
    CacheTtlSecs,
}

impl ConfigKey {
    /// Every key, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ClientTimeoutSecs,
            ConfigKey::ClientUserAgent,
            ConfigKey::ClientProxy,
            ConfigKey::RetryMaxAttempts,
            ConfigKey::CacheMaxEntries,
            ConfigKey::CacheTtlSecs,
        ]
    }

    /// INI section holding this key.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::ClientTimeoutSecs | ConfigKey::ClientUserAgent | ConfigKey::ClientProxy => {
                "client"
            }
            ConfigKey::RetryMaxAttempts => "retry",
            ConfigKey::CacheMaxEntries | ConfigKey::CacheTtlSecs => "cache",
        }
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::ClientTimeoutSecs => "timeout_secs",
            ConfigKey::ClientUserAgent => "user_agent",
            ConfigKey::ClientProxy => "proxy",
            ConfigKey::RetryMaxAttempts => "max_attempts",
            ConfigKey::CacheMaxEntries => "max_entries",
            ConfigKey::CacheTtlSecs => "ttl_secs",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Current value rendered as a string. Unset optional values are empty.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ClientTimeoutSecs => config.client.timeout_secs.to_string(),
            ConfigKey::ClientUserAgent => config.client.user_agent.clone(),
            ConfigKey::ClientProxy => config.client.proxy.clone().unwrap_or_default(),
            ConfigKey::RetryMaxAttempts => config.retry.max_attempts.to_string(),
            ConfigKey::CacheMaxEntries => config.cache.max_entries.to_string(),
            ConfigKey::CacheTtlSecs => config
                .cache
                .ttl_secs
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and store a value. An empty value clears optional settings.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::ClientTimeoutSecs => {
                config.client.timeout_secs = self.parse_positive(value)?;
            }
            ConfigKey::ClientUserAgent => {
                if value.is_empty() {
                    return Err(self.invalid(value, "must not be empty"));
                }
                config.client.user_agent = value.to_string();
            }
            ConfigKey::ClientProxy => {
                config.client.proxy = (!value.is_empty()).then(|| value.to_string());
            }
            ConfigKey::RetryMaxAttempts => {
                let attempts = self.parse_positive(value)?;
                config.retry.max_attempts = u32::try_from(attempts)
                    .map_err(|_| self.invalid(value, "too large"))?;
            }
            ConfigKey::CacheMaxEntries => {
                config.cache.max_entries = self.parse_positive(value)?;
            }
            ConfigKey::CacheTtlSecs => {
                config.cache.ttl_secs = if value.is_empty() {
                    None
                } else {
                    Some(self.parse_positive(value)?)
                };
            }
        }
        Ok(())
    }

    fn parse_positive(&self, value: &str) -> Result<u64, ConfigError> {
        match value.parse::<u64>() {
            Ok(0) => Err(self.invalid(value, "must be at least 1")),
            Ok(n) => Ok(n),
            Err(_) => Err(self.invalid(value, "expected a positive integer")),
        }
    }

    fn invalid(&self, value: &str, reason: &str) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key_name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for key in ConfigKey::all() {
            let parsed: ConfigKey = key.name().parse().unwrap();
            assert_eq!(parsed, *key);
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "client.colour".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn test_set_and_get() {
        let mut config = ConfigFile::default();

        ConfigKey::RetryMaxAttempts.set(&mut config, "4").unwrap();
        assert_eq!(ConfigKey::RetryMaxAttempts.get(&config), "4");

        ConfigKey::ClientProxy.set(&mut config, "http://p:1").unwrap();
        assert_eq!(config.client.proxy.as_deref(), Some("http://p:1"));

        ConfigKey::ClientProxy.set(&mut config, "").unwrap();
        assert!(config.client.proxy.is_none());
        assert_eq!(ConfigKey::ClientProxy.get(&config), "");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ConfigFile::default();

        assert!(ConfigKey::RetryMaxAttempts.set(&mut config, "0").is_err());
        assert!(ConfigKey::ClientTimeoutSecs.set(&mut config, "soon").is_err());
        assert!(ConfigKey::ClientUserAgent.set(&mut config, "  ").is_err());
        assert!(ConfigKey::RetryMaxAttempts
            .set(&mut config, "99999999999")
            .is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_ttl_clears_on_empty() {
        let mut config = ConfigFile::default();
        ConfigKey::CacheTtlSecs.set(&mut config, "120").unwrap();
        assert_eq!(config.cache.ttl_secs, Some(120));

        ConfigKey::CacheTtlSecs.set(&mut config, "").unwrap();
        assert_eq!(config.cache.ttl_secs, None);
    }
}
