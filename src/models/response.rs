//! HTTP response data model.
//!
//! Every execution produces an [`ApiResponse`], whether the server answered
//! or the transport failed. A transport failure is encoded as `status == 0`
//! with the failure message in `status_text` and `body`, so callers never
//! need a separate failure branch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code, or `0` for a transport-level failure.
    pub status: u16,

    /// HTTP status text, or the failure message for transport failures.
    pub status_text: String,

    /// Response headers, flattened to one value per name as received.
    pub headers: HashMap<String, String>,

    /// Response body as raw text, never parsed.
    pub body: String,

    /// Wall-clock duration of the request in milliseconds.
    pub elapsed_ms: u64,

    /// Byte length of the body (UTF-8 encoded), not including headers.
    pub size_bytes: u64,
}

impl ApiResponse {
    /// Creates a response with the given status and no headers or body.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: HashMap::new(),
            body: String::new(),
            elapsed_ms: 0,
            size_bytes: 0,
        }
    }

    /// Synthesizes a transport-failure response from an error message.
    ///
    /// The message lands in both `status_text` and `body`; a blank message
    /// falls back to a generic "Network Error".
    pub fn transport_failure(message: impl Into<String>, elapsed_ms: u64) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "Network Error".to_string();
        }
        Self {
            status: 0,
            status_text: message.clone(),
            headers: HashMap::new(),
            body: message,
            elapsed_ms,
            size_bytes: 0,
        }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Checks if this response encodes a transport-level failure.
    pub fn is_transport_failure(&self) -> bool {
        self.status == 0
    }

    /// Gets the Content-Type header value if present, case-insensitively.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = ApiResponse::new(200, "OK");
        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        assert!(response.headers.is_empty());
        assert!(response.is_success());
        assert!(!response.is_transport_failure());
    }

    #[test]
    fn test_transport_failure() {
        let response = ApiResponse::transport_failure("connection refused", 12);
        assert_eq!(response.status, 0);
        assert_eq!(response.status_text, "connection refused");
        assert_eq!(response.body, "connection refused");
        assert_eq!(response.elapsed_ms, 12);
        assert_eq!(response.size_bytes, 0);
        assert!(response.is_transport_failure());
        assert!(!response.is_success());
    }

    #[test]
    fn test_transport_failure_blank_message() {
        let response = ApiResponse::transport_failure("  ", 0);
        assert_eq!(response.status_text, "Network Error");
        assert_eq!(response.body, "Network Error");
    }

    #[test]
    fn test_content_type_case_insensitive() {
        let mut response = ApiResponse::new(200, "OK");
        assert_eq!(response.content_type(), None);

        response
            .headers
            .insert("content-type".to_string(), "text/plain".to_string());
        assert_eq!(response.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_not_success_statuses() {
        assert!(!ApiResponse::new(301, "Moved Permanently").is_success());
        assert!(!ApiResponse::new(404, "Not Found").is_success());
        assert!(!ApiResponse::new(500, "Internal Server Error").is_success());
    }
}
