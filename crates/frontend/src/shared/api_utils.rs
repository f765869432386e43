//! API utilities for frontend-backend communication
//!
//! The backend serves this page, so requests go to the same origin by
//! default. Set `INVENTORY_API_BASE` at build time (e.g.
//! `INVENTORY_API_BASE=http://localhost:3000 trunk serve`) to point the
//! client at a different origin.

use super::api_error::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    option_env!("INVENTORY_API_BASE")
        .unwrap_or_default()
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/7");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Decode a JSON body, turning a non-success status into [`ApiError`]
/// with the server's `{error}` message when it sent one.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await?;
    if !ok {
        return Err(ApiError::from_body(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
