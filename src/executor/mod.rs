//! HTTP request execution.
//!
//! [`execute`] performs the network call through a [`Transport`], measures
//! wall-clock duration and payload size, and normalizes both success and
//! failure into a single [`ApiResponse`] shape. It is infallible by design:
//! a transport failure becomes a zero-status response carrying the failure
//! message, so callers never need a separate error branch.

pub mod error;
pub mod transport;

pub use error::TransportError;
pub use transport::{ReqwestTransport, Transport, TransportReply};

use crate::builder::{resolve_request, ResolvedRequest};
use crate::models::{ApiRequest, ApiResponse};
use std::time::Instant;

/// Executes a resolved request and returns a normalized response.
///
/// Timing starts before the transport call and stops as soon as it settles,
/// success or failure. On success, `size_bytes` is the UTF-8 byte length of
/// the body text, which can differ from its character count.
pub async fn execute<T: Transport + ?Sized>(
    transport: &T,
    request: &ResolvedRequest,
) -> ApiResponse {
    let start = Instant::now();

    match transport.send(request).await {
        Ok(reply) => {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            let size_bytes = reply.body.len() as u64;
            ApiResponse {
                status: reply.status,
                status_text: reply.status_text,
                headers: reply.headers,
                body: reply.body,
                elapsed_ms,
                size_bytes,
            }
        }
        Err(err) => {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            ApiResponse::transport_failure(err.to_string(), elapsed_ms)
        }
    }
}

/// Resolves a structured request and executes it in one step.
///
/// Convenience for the common send action: the builder derives the final
/// URL, headers, and body, then [`execute`] performs the call.
pub async fn send_request<T: Transport + ?Sized>(
    transport: &T,
    request: &ApiRequest,
) -> ApiResponse {
    let resolved = resolve_request(request);
    execute(transport, &resolved).await
}
