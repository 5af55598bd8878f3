//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps `reqwest` with API-key management and typed response
//! deserialization. Prompt construction lives in the flows; this client only
//! turns one prompt string into one completion string.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, AiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`AiError::Api`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trendboard/0.1 (trend-analysis)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // model path joins onto the root rather than replacing a segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AiError::Api {
            status: 0,
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and return the first candidate's text.
    ///
    /// # Errors
    ///
    /// - [`AiError::Http`] on network failure.
    /// - [`AiError::Api`] on a non-2xx status.
    /// - [`AiError::Deserialize`] if the body does not match the expected
    ///   shape.
    /// - [`AiError::EmptyResponse`] if no candidate carries text.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "requesting completion");
        let url = self.build_url();
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.client.post(url.clone()).json(&body).send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                message: extract_api_message(&raw),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| AiError::Deserialize {
                context: format!("generateContent({})", self.model),
                source: e,
            })?;

        parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(AiError::EmptyResponse)
    }

    /// Builds the full request URL, with the API key as a query parameter.
    fn build_url(&self) -> Url {
        let mut url = self.base_url.clone();
        // Base URL is validated at construction, so the join cannot fail.
        if let Ok(joined) = url.join(&format!("v1beta/models/{}:generateContent", self.model)) {
            url = joined;
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

/// Pull the human-readable message out of a Gemini error body, falling back
/// to the raw body when it is not the expected `{"error": {"message": ...}}`.
fn extract_api_message(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::with_base_url("test-key", "gemini-1.5-flash", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_includes_model_path_and_key() {
        let client = test_client("https://generativelanguage.googleapis.com");
        let url = client.build_url();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn build_url_tolerates_trailing_slash() {
        let a = test_client("http://localhost:9000").build_url();
        let b = test_client("http://localhost:9000/").build_url();
        assert_eq!(a, b);
    }

    #[test]
    fn extract_api_message_prefers_structured_error() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid"}}"#;
        assert_eq!(extract_api_message(raw), "API key not valid");
    }

    #[test]
    fn extract_api_message_falls_back_to_raw_body() {
        assert_eq!(extract_api_message("upstream exploded"), "upstream exploded");
    }
}
