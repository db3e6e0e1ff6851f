//! Transport error types.
//!
//! These errors cover everything that can go wrong before a response is
//! received from the network. The executor recovers all of them into a
//! uniform zero-status [`crate::models::ApiResponse`]; they are never
//! surfaced to callers of `execute`.

use std::fmt;

/// Errors raised by the network transport before a response is received.
#[derive(Debug)]
pub enum TransportError {
    /// Connection-level failure: DNS resolution, connection refused, TLS.
    Connect(String),

    /// The transport's own timeout elapsed before a response arrived.
    Timeout,

    /// The request could not be constructed (invalid URL, bad header value).
    InvalidRequest(String),

    /// Any other network-level failure, including errors while reading the body.
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(msg) => write!(f, "Connection failed: {}", msg),
            TransportError::Timeout => write!(f, "Request timed out"),
            TransportError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            TransportError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Maps reqwest's error types to our transport error variants.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_builder() || err.is_request() {
            TransportError::InvalidRequest(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransportError::Connect("connection refused".to_string());
        assert_eq!(format!("{}", err), "Connection failed: connection refused");

        assert_eq!(format!("{}", TransportError::Timeout), "Request timed out");

        let err = TransportError::Network("broken pipe".to_string());
        assert_eq!(format!("{}", err), "Network error: broken pipe");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &TransportError::Timeout;
        assert_eq!(format!("{}", err), "Request timed out");
    }
}
