//! Data models and errors for the history list.

use crate::models::{ApiRequest, ApiResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the merged history list.
///
/// Ephemeral entries (`persisted == false`) live only in the local cache and
/// are subject to the retention cap. Persisted entries are backed by the
/// remote store: they are exempt from the cap and must be deleted remotely
/// when removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier within the history list.
    pub id: String,

    /// User-supplied display name; only persisted entries carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether this entry is backed by the remote store.
    #[serde(default)]
    pub persisted: bool,

    /// The request that was (or can be) executed.
    pub request: ApiRequest,

    /// The captured response; absent when none was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ApiResponse>,

    /// When this entry was created.
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an ephemeral entry for a completed send.
    pub fn ephemeral(request: ApiRequest, response: Option<ApiResponse>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: None,
            persisted: false,
            request,
            response,
            created_at: Utc::now(),
        }
    }
}

/// Errors surfaced by history operations.
///
/// None of these are fatal: the worst-case outcome of any operation is a
/// reported message and an unchanged (or partially-applied) list.
#[derive(Debug)]
pub enum HistoryError {
    /// Input rejected before any I/O was attempted (e.g. a blank save name).
    Validation(String),

    /// The operation requires a remote store but none is configured.
    Unconfigured,

    /// The remote store rejected or failed the operation.
    Remote(String),

    /// The local cache could not be read or written.
    Cache(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Validation(msg) => write!(f, "Validation error: {}", msg),
            HistoryError::Unconfigured => {
                write!(f, "No remote store is configured")
            }
            HistoryError::Remote(msg) => write!(f, "Remote store error: {}", msg),
            HistoryError::Cache(msg) => write!(f, "Local cache error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}
