//! CLI error types.

use std::fmt;
use std::io;

use spider::config::ConfigError;
use spider::WebFetchError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded, parsed or saved.
    Config(String),

    /// The HTTP session could not be created.
    Session(WebFetchError),

    /// Failed to create the Tokio runtime.
    Runtime(String),

    /// Writing results to stdout failed.
    Output(io::Error),

    /// Some URLs could not be fetched.
    FetchFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Session(e) => write!(f, "Failed to create HTTP session: {}", e),
            CliError::Runtime(msg) => write!(f, "Failed to create Tokio runtime: {}", msg),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
            CliError::FetchFailed { failed, total } => {
                write!(f, "{} of {} URLs failed", failed, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Session(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Output(e)
    }
}

impl From<WebFetchError> for CliError {
    fn from(e: WebFetchError) -> Self {
        CliError::Session(e)
    }
}
