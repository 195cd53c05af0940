//! Error type shared by every API call.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified once here so views can decide between forcing the
//! auth scene (`Unauthorized`), showing the backend's message (`Status`) or
//! degrading to an empty result (everything else).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A bearer endpoint was called with no stored access token.
    #[error("not signed in")]
    MissingToken,
    /// The backend rejected the credential.
    #[error("session rejected ({0})")]
    Unauthorized(u16),
    /// Any other non-OK response.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// No HTTP transport exists outside the browser build.
    #[error("http client unavailable outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-OK response, preferring the backend's `detail` message.
    #[must_use]
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized(status);
        }
        let detail = extract_detail(body).unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, detail }
    }

    /// Whether the failure means the stored session is unusable.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Unauthorized(_))
    }
}

/// Pull a human-readable message out of a FastAPI error body.
///
/// Handles both `{"detail": "..."}` and validation errors of the form
/// `{"detail": [{"msg": "..."}]}`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}
