//! Editable request state.
//!
//! The draft is what the user edits between sends: method, URL, header and
//! parameter lists, and body. Sending snapshots the draft into an immutable
//! [`ApiRequest`]; replaying a history entry copies its request fields back
//! into the draft and leaves history untouched.

use crate::history::HistoryEntry;
use crate::models::{ApiRequest, HttpMethod, KeyValuePair};
use chrono::Utc;

/// The live editable request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<KeyValuePair>,
    pub params: Vec<KeyValuePair>,
    pub body: String,
}

impl Default for RequestDraft {
    /// An empty GET draft with one blank pair in each list, matching the
    /// editor's initial state.
    fn default() -> Self {
        Self {
            method: HttpMethod::GET,
            url: String::new(),
            headers: vec![KeyValuePair::new()],
            params: vec![KeyValuePair::new()],
            body: String::new(),
        }
    }
}

impl RequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a history entry's request fields into the draft (replay).
    pub fn apply_entry(&mut self, entry: &HistoryEntry) {
        self.method = entry.request.method;
        self.url = entry.request.url.clone();
        self.headers = entry.request.headers.clone();
        self.params = entry.request.params.clone();
        self.body = entry.request.body.clone();
    }

    /// Snapshots the draft into a fresh request for a send.
    ///
    /// Every snapshot gets a new id and timestamp; the draft itself is
    /// never handed to the executor.
    pub fn to_request(&self) -> ApiRequest {
        ApiRequest {
            id: uuid::Uuid::new_v4().to_string(),
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            params: self.params.clone(),
            body: self.body.clone(),
            created_at: Utc::now(),
        }
    }
}
