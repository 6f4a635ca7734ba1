//! Error types for the countries API client.
//!
//! # Design
//! Every non-200 response lands in `Status` with the numeric code, the
//! reason phrase and the raw body. The upstream API answers "no match" with
//! a 404, so `is_not_found` is provided rather than a dedicated variant.
//! Decode failures keep the underlying `serde_json::Error` so callers can
//! inspect line and column.

use thiserror::Error;

/// Errors returned by `CountriesClient` and `HttpClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A multi-code lookup was requested with no codes.
    #[error("empty list of codes")]
    EmptyCodes,

    /// The server answered with something other than 200.
    #[error("unexpected API status {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The response body is not a JSON array of country records.
    #[error("deserialization failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a response (DNS, connect, IO, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// True when the server reported that nothing matched the lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_reason() {
        let err = ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "unexpected API status 503 Service Unavailable");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: r#"{"status":404,"message":"Not Found"}"#.to_string(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::EmptyCodes.is_not_found());
    }
}
