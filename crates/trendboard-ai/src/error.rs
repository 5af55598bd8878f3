use thiserror::Error;

/// Errors returned by the LLM client and flows.
#[derive(Debug, Error)]
pub enum AiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx status with an error payload.
    #[error("model API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered successfully but produced no usable candidate text.
    #[error("model returned no candidate text")]
    EmptyResponse,

    /// The model's text did not match the shape the flow asked for.
    #[error("unexpected model output: {0}")]
    UnexpectedOutput(String),
}
