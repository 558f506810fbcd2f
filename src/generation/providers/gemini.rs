//! Gemini provider implementation using the generateContent API.
//!
//! One buffered request/response pair, no streaming. The request body is the
//! nested `contents/parts/text` structure the API expects; the response is
//! parsed with fully optional nesting so a missing layer surfaces as a
//! `Parse` error instead of a panic.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::generation::provider::{GenerationProvider, ProviderError};

/// Hard cap on a single request. Routes through the same fallback path as
/// every other failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Gemini generateContent API Types
// ============================================================================

/// The request body: a list of contents, each a list of parts.
#[derive(Serialize, Debug)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct Part {
    text: String,
}

/// Response types. Everything below the top level is optional: the API
/// omits layers on safety blocks and empty completions.
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize, Debug)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Wraps a prompt string in the contents/parts/text request structure.
fn prompt_to_request(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Walks candidates → content → parts → text, erroring on any missing layer.
fn extract_text(response: GenerateResponse) -> Result<String, ProviderError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            ProviderError::Parse("response missing candidate content".to_string())
        })
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Gemini API provider using the generateContent endpoint.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key (passed as a `key` query parameter)
    /// * `model` - Model identifier (e.g. "gemini-1.5-flash")
    /// * `base_url` - Optional custom base URL (defaults to the public API)
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("API key is empty".to_string()));
        }

        let body = prompt_to_request(prompt);
        info!(
            "Gemini generateContent request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        // The key rides in the query string and must never be logged.
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("response body not JSON: {e}")))?;

        let text = extract_text(parsed)?;
        debug!("Gemini generated {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_to_request_shape() {
        let request = prompt_to_request("analyze this");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "analyze this");
    }

    #[test]
    fn test_extract_text_happy_path() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "hello");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_text_candidate_without_content() {
        // Safety blocks return candidates with finishReason but no content
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_text_empty_parts() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_text_missing_candidates_field() {
        let response: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let provider = GeminiProvider::new(
            "k".to_string(),
            "gemini-1.5-flash".to_string(),
            Some("http://localhost:9999".to_string()),
        );
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
