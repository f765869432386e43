use contracts::domain::a001_product::response::ErrorResponse;
use thiserror::Error;

/// Failure of a request to the inventory backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-success status without a usable error body
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Non-success status with the server's `{error}` message
    #[error("{0}")]
    Server(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Browser API failure while preparing the request
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Error for a non-success response, preferring the `{error}` field of
    /// the body over the bare status.
    pub fn from_body(status: u16, body: &str) -> Self {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|m| !m.trim().is_empty())
            .map(ApiError::Server)
            .unwrap_or(ApiError::Http(status))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
