//! Request resolution: from structured editable inputs to a wire-level request.
//!
//! Resolution is pure and performs no I/O. It filters out disabled and
//! blank-keyed pairs, serializes the remaining parameters into a
//! percent-encoded query string, flattens headers last-one-wins, and applies
//! the body / content-type policy:
//!
//! - GET requests never carry a body, regardless of the body field.
//! - Non-GET requests with a non-blank body send it verbatim, so non-JSON
//!   payloads pass through untouched.
//! - `Content-Type: application/json` is injected only when no header
//!   matches `Content-Type` case-insensitively.

use crate::models::{ApiRequest, HttpMethod, KeyValuePair};
use std::collections::HashMap;
use url::form_urlencoded;

/// The fully computed wire-level request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Final URL, including the serialized query string.
    pub url: String,

    /// Final header mapping after filtering and duplicate resolution.
    pub headers: HashMap<String, String>,

    /// Body to send, if any.
    pub body: Option<String>,
}

/// Serializes enabled parameters onto a base URL.
///
/// Pairs that are disabled or have a blank key are skipped. If none remain,
/// the base URL is returned unchanged. Otherwise the enabled pairs are
/// percent-encoded in list order (repeated keys preserved) and appended with
/// `?`, or `&` when the base already carries a query string.
pub fn resolve_url(base: &str, params: &[KeyValuePair]) -> String {
    let active: Vec<&KeyValuePair> = params.iter().filter(|p| p.is_active()).collect();
    if active.is_empty() {
        return base.to_string();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for pair in &active {
        serializer.append_pair(&pair.key, &pair.value);
    }
    let query = serializer.finish();

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

/// Flattens enabled headers into a map.
///
/// Pairs that are disabled or have a blank key are skipped. On duplicate
/// keys (case-sensitive) the last occurrence in list order wins.
pub fn resolve_headers(headers: &[KeyValuePair]) -> HashMap<String, String> {
    let mut resolved = HashMap::new();
    for pair in headers.iter().filter(|h| h.is_active()) {
        resolved.insert(pair.key.clone(), pair.value.clone());
    }
    resolved
}

/// Resolves a structured request into its wire-level form.
pub fn resolve_request(request: &ApiRequest) -> ResolvedRequest {
    let url = resolve_url(&request.url, &request.params);
    let mut headers = resolve_headers(&request.headers);

    let body = if request.method != HttpMethod::GET && request.has_body() {
        let has_content_type = headers.keys().any(|k| k.eq_ignore_ascii_case("content-type"));
        if !has_content_type {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        Some(request.body.clone())
    } else {
        None
    };

    ResolvedRequest {
        method: request.method,
        url,
        headers,
        body,
    }
}
