//! Common types shared across CLI commands.

use std::fmt;

use clap::ValueEnum;

/// Cache policy for `fetch`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CacheMode {
    /// Serve repeated URLs from the cache, fetching only on a miss
    Through,
    /// Always fetch, recording results in the cache
    Skip,
    /// No caching
    Off,
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheMode::Through => "through",
            CacheMode::Skip => "skip",
            CacheMode::Off => "off",
        };
        f.write_str(name)
    }
}
