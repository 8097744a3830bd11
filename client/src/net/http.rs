//! HTTP error type and its user-facing rendering.
//!
//! ERROR HANDLING
//! ==============
//! API calls return `HttpError` rather than panicking. Views never show the
//! raw error: they pass it through `http_error_to_human`, which prefers the
//! server-provided detail over transport-level text.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::types::ApiErrorBody;

/// Failure of a request against the panel API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The request never produced a response.
    #[error("Network Error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected schema.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl HttpError {
    /// Response body, when the server sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body.as_str()),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Turn a request failure into a message suitable for a flash notice.
///
/// Precedence: first `errors[].detail` in the response body, then a string
/// `error` field, then the error's own display text.
pub fn http_error_to_human(err: &HttpError) -> String {
    if let Some(body) = err.body().and_then(parse_error_body) {
        if let Some(detail) = body
            .errors
            .into_iter()
            .next()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty())
        {
            return detail;
        }
        if let Some(message) = body.error.filter(|m| !m.is_empty()) {
            return message;
        }
    }
    err.to_string()
}

fn parse_error_body(raw: &str) -> Option<ApiErrorBody> {
    serde_json::from_str(raw).ok()
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16, body: String) -> HttpError {
    HttpError::Status { status, body }
}
