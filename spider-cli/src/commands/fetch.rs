//! `fetch` command: GET URLs through a retry + cache client stack.

use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use spider::config::ConfigFile;
use spider::web::{SingleSessionPool, WebByteClient, WebTextClient};
use spider::{Client, ClientExt, MemoryCache, RetryClient};
use tracing::{debug, info};

use super::common::CacheMode;
use crate::error::CliError;

/// Arguments for `spider fetch`.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// URLs to fetch, in order
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Cache policy
    #[arg(long, value_enum, default_value_t = CacheMode::Through)]
    pub mode: CacheMode,

    /// Attempts per URL, including the first (overrides retry.max_attempts)
    #[arg(long)]
    pub retries: Option<u32>,

    /// Print response bodies as text instead of a size summary
    #[arg(long)]
    pub text: bool,

    /// Configuration file to use instead of the default
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the fetch command.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };

    let attempts = match args.retries {
        Some(n) => NonZeroU32::new(n)
            .ok_or_else(|| CliError::Config("--retries must be at least 1".to_string()))?,
        None => config.max_attempts(),
    };

    let pool = Arc::new(SingleSessionPool::with_settings(&config.session_settings())?);
    info!(
        mode = %args.mode,
        attempts = attempts.get(),
        urls = args.urls.len(),
        "Fetching"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let failed = runtime.block_on(async {
        if args.text {
            let cache = Arc::new(MemoryCache::new(config.cache.max_entries, config.cache_ttl()));
            let client = build_stack(WebTextClient::new(pool), args.mode, cache, attempts);
            fetch_all(&client, &args.urls, |_, body: &String| {
                writeln!(io::stdout().lock(), "{}", body)
            })
            .await
        } else {
            let cache = Arc::new(MemoryCache::new(config.cache.max_entries, config.cache_ttl()));
            let client = build_stack(WebByteClient::new(pool), args.mode, cache, attempts);
            fetch_all(&client, &args.urls, |url, body| {
                writeln!(io::stdout().lock(), "{}\t{} bytes", url, body.len())
            })
            .await
        }
    })?;

    if failed > 0 {
        return Err(CliError::FetchFailed {
            failed,
            total: args.urls.len(),
        });
    }
    Ok(())
}

/// Layer the cache policy and retry bound around `base`.
pub fn build_stack<C, V>(
    base: C,
    mode: CacheMode,
    cache: Arc<MemoryCache<String, V>>,
    attempts: NonZeroU32,
) -> RetryClient<Box<dyn Client<String, V>>>
where
    C: Client<String, V> + 'static,
    V: Clone + Send + Sync + 'static,
{
    let layered: Box<dyn Client<String, V>> = match mode {
        CacheMode::Through => base.cached(cache).boxed(),
        CacheMode::Skip => base.cache_skip(cache).boxed(),
        CacheMode::Off => base.boxed(),
    };
    RetryClient::with_max_attempts(layered, attempts)
}

/// Fetch each URL in order, reporting successes through `report`.
///
/// Returns the number of failures. A `report` error stops the run.
async fn fetch_all<C, V, F>(client: &C, urls: &[String], mut report: F) -> io::Result<usize>
where
    C: Client<String, V>,
    F: FnMut(&str, &V) -> io::Result<()>,
{
    let mut failed = 0;
    for url in urls {
        match client.fetch(url).await {
            Ok(value) => report(url, &value)?,
            Err(e) => {
                debug!(url = %url, error = %e, "Fetch failed");
                eprintln!("{}: {}", url, e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}
