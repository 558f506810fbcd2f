use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during provider operations.
/// Every variant collapses into the same fallback diagnostic at the
/// state-machine level; the distinction only matters for the log.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Response arrived but didn't contain usable generated content.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A remote text-generation backend.
///
/// One prompt in, one block of generated text out. No streaming, no
/// retries: the purge flow issues exactly one call per submission.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Generates a completion for the given prompt and returns the raw text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
