//! HTTP request data models.
//!
//! This module defines the structured, editable request representation: the
//! method, base URL, ordered header and parameter lists, and raw body. A
//! fresh `ApiRequest` is constructed for every send and is never mutated
//! after being handed to the executor.

use crate::models::keyvalue::KeyValuePair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP request method.
///
/// Covers the methods the composer exposes, a subset of RFC 7231 / RFC 5789.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP DELETE method - remove a resource
    DELETE,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Parses a string into an HttpMethod, case-insensitively.
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a supported method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "PATCH" => Some(HttpMethod::PATCH),
            "DELETE" => Some(HttpMethod::DELETE),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured HTTP request as composed by the user.
///
/// `url` is the base URL without a query string; enabled `params` are
/// serialized into the query string at resolution time. Duplicate keys in
/// `params` are all included; duplicate keys in `headers` resolve
/// last-one-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Unique identifier for this request snapshot.
    pub id: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// Base URL, without the query string contributed by `params`.
    pub url: String,

    /// Ordered header list; disabled entries are retained but not sent.
    pub headers: Vec<KeyValuePair>,

    /// Ordered query parameter list; disabled entries are retained but not sent.
    pub params: Vec<KeyValuePair>,

    /// Raw request body. Sent verbatim for non-GET methods when non-blank.
    pub body: String,

    /// When this request snapshot was created.
    pub created_at: DateTime<Utc>,
}

impl ApiRequest {
    /// Creates a new request with a fresh id and the current timestamp.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Checks if the request has a non-blank body.
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::PATCH.as_str(), "PATCH");
        assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("Post"), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::from_str("OPTIONS"), None);
        assert_eq!(HttpMethod::from_str(""), None);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::PUT), "PUT");
    }

    #[test]
    fn test_api_request_new() {
        let request = ApiRequest::new(HttpMethod::GET, "https://example.com");
        assert_eq!(request.method, HttpMethod::GET);
        assert_eq!(request.url, "https://example.com");
        assert!(request.headers.is_empty());
        assert!(request.params.is_empty());
        assert!(!request.has_body());
        assert!(!request.id.is_empty());
    }

    #[test]
    fn test_fresh_requests_have_unique_ids() {
        let a = ApiRequest::new(HttpMethod::GET, "https://example.com");
        let b = ApiRequest::new(HttpMethod::GET, "https://example.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_has_body_ignores_whitespace() {
        let mut request = ApiRequest::new(HttpMethod::POST, "https://example.com");
        request.body = "   \n".to_string();
        assert!(!request.has_body());
        request.body = r#"{"a":1}"#.to_string();
        assert!(request.has_body());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut request = ApiRequest::new(HttpMethod::POST, "https://api.example.com/data");
        request
            .headers
            .push(KeyValuePair::with("Accept", "application/json"));
        request.body = r#"{"name":"test"}"#.to_string();

        let json = serde_json::to_string(&request).unwrap();
        let back: ApiRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
