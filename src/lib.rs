//! Request execution and history reconciliation for an interactive HTTP
//! request composer.
//!
//! This crate is the engine behind a request composer/inspector UI: the user
//! builds a request from structured, partially-enabled key/value inputs,
//! sends it, inspects the normalized response, and works with a merged
//! history of past executions backed by a local ephemeral cache and an
//! optional remote persistence store.
//!
//! # Architecture
//!
//! - **models**: key/value pairs, requests, and the uniform response shape
//! - **builder**: pure resolution of the wire-level request (query string,
//!   header flattening, body and content-type policy)
//! - **executor**: executes a resolved request through a [`Transport`] and
//!   normalizes transport failures into zero-status responses
//! - **history**: the reconciler - load/merge, append-on-send with a
//!   50-entry ephemeral cap, delete, clear, and explicit save
//! - **draft**: the editable request state, snapshot per send and the
//!   target of history replay
//! - **formatter**: byte humanization, JSON pretty-printing, status
//!   classification
//! - **config**: optional remote-store settings, resolved once from the
//!   environment
//!
//! # Example
//!
//! ```no_run
//! use api_workbench::config::RemoteConfig;
//! use api_workbench::draft::RequestDraft;
//! use api_workbench::executor::{send_request, ReqwestTransport};
//! use api_workbench::history::{HistoryService, MemoryCacheStore, RestRemoteStore};
//! use api_workbench::models::HttpMethod;
//!
//! # async fn example() {
//! let transport = ReqwestTransport::new();
//! let remote = RemoteConfig::from_env().map(RestRemoteStore::new);
//! let mut history = HistoryService::new(MemoryCacheStore::new(), remote);
//! history.load().await;
//!
//! let mut draft = RequestDraft::new();
//! draft.method = HttpMethod::GET;
//! draft.url = "https://api.example.com/users".to_string();
//!
//! let request = draft.to_request();
//! let response = send_request(&transport, &request).await;
//! history.record_send(request, response);
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod draft;
pub mod executor;
pub mod formatter;
pub mod history;
pub mod models;

pub use builder::{resolve_request, ResolvedRequest};
pub use draft::RequestDraft;
pub use executor::{execute, send_request, ReqwestTransport, Transport};
pub use history::{ClearOutcome, HistoryEntry, HistoryError, HistoryService};
pub use models::{ApiRequest, ApiResponse, HttpMethod, KeyValuePair};
