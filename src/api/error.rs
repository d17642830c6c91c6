//! API Error Types
//!
//! Transport, status and decode failures are kept apart so log lines
//! say which one happened; callers treat them all the same way.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, bad URL)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The body could not be decoded into the expected shape
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Extract a readable message from an error body.
///
/// The backend reports failures as `{"detail": ...}` where detail is
/// either a string or a list of validation errors.
pub fn error_detail(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "no details".to_string();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}
