//! Planning API error types.

/// Errors from talking to the planning service.
///
/// Every variant is a transport-level failure from the caller's point of
/// view: the service did not produce a usable response envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Non-2xx status with a body that is not an envelope
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Service could not be reached at all
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Truncated copy of a response body, for diagnostics.
    pub(crate) fn body_excerpt(body: &str) -> String {
        body.chars().take(500).collect()
    }
}
