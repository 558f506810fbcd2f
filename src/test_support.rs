//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::generation::{GenerationProvider, ProviderError};

/// A provider that returns a canned reply, for tests that don't need
/// real API calls.
pub struct StaticProvider(pub &'static str);

#[async_trait]
impl GenerationProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

/// A provider that always fails with a network error.
pub struct FailingProvider;

#[async_trait]
impl GenerationProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Network("simulated outage".to_string()))
    }
}

/// Creates a test App with a StaticProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(StaticProvider(
            r##"{"load":"50%","patch":"Hold steady.","color":"#55aaff"}"##,
        )),
        "test-model".to_string(),
    )
}
