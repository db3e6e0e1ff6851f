//! The network transport capability and its reqwest implementation.
//!
//! The core does not implement an HTTP client; it consumes a [`Transport`]
//! that performs the wire transfer. Production code uses [`ReqwestTransport`];
//! tests substitute stubs to exercise the executor without a network.

use crate::builder::ResolvedRequest;
use crate::executor::error::TransportError;
use crate::models::HttpMethod;
use async_trait::async_trait;
use std::collections::HashMap;

/// What the transport hands back when the server responded, any status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// Numeric HTTP status code.
    pub status: u16,

    /// Status text as reported by the transport.
    pub status_text: String,

    /// Response headers flattened to one value per name; when the wire
    /// carries repeated names, later occurrences overwrite earlier ones.
    pub headers: HashMap<String, String>,

    /// Full response body decoded as text.
    pub body: String,
}

/// A capability that performs a single HTTP call.
///
/// No retries, timeout enforcement, or redirect policy is imposed here
/// beyond what the implementation does by default; the tool's purpose is to
/// expose raw behavior to the user.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the HTTP call described by `request`.
    ///
    /// # Returns
    ///
    /// `Ok(TransportReply)` whenever the server responded, regardless of
    /// status code; `Err(TransportError)` only for failures occurring before
    /// a response was received.
    async fn send(&self, request: &ResolvedRequest) -> Result<TransportReply, TransportError>;
}

/// Production transport built on [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport from an existing client, so the embedding
    /// application can configure proxies, TLS, or timeouts.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::DELETE => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ResolvedRequest) -> Result<TransportReply, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }

        let body = response.text().await?;

        Ok(TransportReply {
            status,
            status_text,
            headers,
            body,
        })
    }
}
