//! Shared HTTP client for the collectors.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Thin wrapper around `reqwest::Client` with the timeout and `User-Agent`
/// every collector shares. Collectors hold a reference and build their own
/// URLs.
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    /// Creates a client with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the raw body text. Non-2xx is a typed error.
    pub(crate) async fn get_text(
        &self,
        url: &str,
        source_name: &'static str,
    ) -> Result<String, SourceError> {
        tracing::debug!(source = source_name, "fetching source");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                source_name,
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    /// Fetch a URL and deserialize the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        source_name: &'static str,
    ) -> Result<T, SourceError> {
        let raw = self.get_text(url, source_name).await?;
        serde_json::from_str(&raw).map_err(|e| SourceError::Deserialize {
            context: source_name.to_string(),
            source: e,
        })
    }
}
