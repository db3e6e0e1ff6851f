//! Enable-able key/value pairs used for request headers and query parameters.
//!
//! Pairs are kept in an ordered list for display. Disabling a pair keeps it
//! in the list but excludes it from request construction. All list operations
//! are pure: they take a slice and return a new `Vec`, which keeps UI state
//! updates predictable.

use serde::{Deserialize, Serialize};

/// A single key/value pair with an enabled flag.
///
/// Identity (`id`) is assigned at creation and never reused. Deserialization
/// is defensive: records coming from a loosely-typed store may omit fields,
/// so `enabled` defaults to `true`, `key`/`value` default to empty strings,
/// and a missing `id` gets a fresh UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Unique identifier within the owning list.
    #[serde(default = "fresh_id")]
    pub id: String,

    /// The key, used verbatim (untrimmed) in the resolved request.
    #[serde(default)]
    pub key: String,

    /// The value, used verbatim in the resolved request.
    #[serde(default)]
    pub value: String,

    /// Whether this pair participates in request construction.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_enabled() -> bool {
    true
}

impl KeyValuePair {
    /// Creates a new empty pair with a fresh id, enabled by default.
    pub fn new() -> Self {
        Self {
            id: fresh_id(),
            key: String::new(),
            value: String::new(),
            enabled: true,
        }
    }

    /// Creates an enabled pair with the given key and value.
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Whether this pair should be included when resolving a request:
    /// it must be enabled and its key must be non-blank after trimming.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.trim().is_empty()
    }
}

impl Default for KeyValuePair {
    fn default() -> Self {
        Self::new()
    }
}

/// A field update applied to a single pair in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValueField {
    Key(String),
    Value(String),
    Enabled(bool),
}

/// Returns a new list with an empty pair appended, preserving existing order.
pub fn add_pair(list: &[KeyValuePair]) -> Vec<KeyValuePair> {
    let mut next = list.to_vec();
    next.push(KeyValuePair::new());
    next
}

/// Returns a new list without the pair with the given id.
///
/// A no-op (the list is returned unchanged) when the id is absent.
pub fn remove_pair(list: &[KeyValuePair], id: &str) -> Vec<KeyValuePair> {
    list.iter().filter(|p| p.id != id).cloned().collect()
}

/// Returns a new list with one field replaced on the matching pair.
///
/// Other pairs are untouched; a no-op when the id is absent.
pub fn update_pair(list: &[KeyValuePair], id: &str, field: KeyValueField) -> Vec<KeyValuePair> {
    list.iter()
        .map(|p| {
            if p.id != id {
                return p.clone();
            }
            let mut updated = p.clone();
            match &field {
                KeyValueField::Key(key) => updated.key = key.clone(),
                KeyValueField::Value(value) => updated.value = value.clone(),
                KeyValueField::Enabled(enabled) => updated.enabled = *enabled,
            }
            updated
        })
        .collect()
}
