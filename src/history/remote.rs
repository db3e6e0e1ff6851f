//! Remote persistence for saved executions.
//!
//! The remote store is an optional, consumed capability: a table-like
//! resource holding [`SavedExecution`] records. [`RestRemoteStore`] is the
//! production implementation, speaking a PostgREST-style HTTP API. The
//! store's structured columns (`headers`, `params`, `response_headers`) may
//! not enforce our shapes, so deserialization defensively coerces whatever
//! comes back into canonical form instead of trusting it.

use super::models::HistoryEntry;
use crate::config::RemoteConfig;
use crate::models::{ApiRequest, ApiResponse, HttpMethod, KeyValuePair};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// How many persisted records a load fetches at most.
pub const RECENT_LIMIT: usize = 50;

/// A persisted execution record, matching the remote table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedExecution {
    /// Row id; assigned by the store on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// User-supplied display name, always non-blank.
    pub name: String,

    /// Request method as text.
    pub method: String,

    /// Request base URL.
    pub url: String,

    /// Structured header list; coerced defensively on read.
    #[serde(default, deserialize_with = "coerce_pairs")]
    pub headers: Vec<KeyValuePair>,

    /// Structured parameter list; coerced defensively on read.
    #[serde(default, deserialize_with = "coerce_pairs")]
    pub params: Vec<KeyValuePair>,

    /// Raw request body.
    #[serde(default)]
    pub request_body: String,

    /// Response status; absent when no (real) response was captured.
    #[serde(default)]
    pub response_status: Option<u16>,

    /// Response status text.
    #[serde(default)]
    pub response_status_text: Option<String>,

    /// Response headers; coerced defensively on read.
    #[serde(default, deserialize_with = "coerce_string_map")]
    pub response_headers: HashMap<String, String>,

    /// Response body text.
    #[serde(default)]
    pub response_body: Option<String>,

    /// Response latency in milliseconds.
    #[serde(default)]
    pub response_time: Option<u64>,

    /// Response body size in bytes.
    #[serde(default)]
    pub response_size: Option<u64>,

    /// Row creation time; assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Row update time; assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Coerces an unknown-shaped JSON value into a canonical pair list.
///
/// Non-array values and non-object elements yield nothing; object elements
/// fall back to an empty key/value, `enabled = true`, and a fresh id for
/// whatever fields are missing.
fn coerce_pairs<'de, D>(deserializer: D) -> Result<Vec<KeyValuePair>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(pairs_from_value(&value))
}

fn pairs_from_value(value: &Value) -> Vec<KeyValuePair> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let object = item.as_object()?;
            Some(KeyValuePair {
                id: object
                    .get("id")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                key: object
                    .get("key")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                value: object
                    .get("value")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                enabled: object.get("enabled").and_then(Value::as_bool).unwrap_or(true),
            })
        })
        .collect()
}

/// Coerces an unknown-shaped JSON value into a string-to-string map.
fn coerce_string_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(object) = value.as_object() else {
        return Ok(HashMap::new());
    };
    Ok(object
        .iter()
        .map(|(k, v)| {
            let text = match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            };
            (k.clone(), text)
        })
        .collect())
}

impl SavedExecution {
    /// Builds a record from a request/response pair and a display name.
    ///
    /// Mirrors the store's column semantics: a transport-failure response
    /// (status 0) persists with a null status, so it replays with no
    /// response attached.
    pub fn from_execution(
        name: &str,
        request: &ApiRequest,
        response: Option<&ApiResponse>,
    ) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            method: request.method.as_str().to_string(),
            url: request.url.clone(),
            headers: request.headers.clone(),
            params: request.params.clone(),
            request_body: request.body.clone(),
            response_status: response.map(|r| r.status).filter(|s| *s != 0),
            response_status_text: response
                .map(|r| r.status_text.clone())
                .filter(|t| !t.is_empty()),
            response_headers: response.map(|r| r.headers.clone()).unwrap_or_default(),
            response_body: response.map(|r| r.body.clone()).filter(|b| !b.is_empty()),
            response_time: response.map(|r| r.elapsed_ms).filter(|t| *t != 0),
            response_size: response.map(|r| r.size_bytes).filter(|s| *s != 0),
            created_at: None,
            updated_at: None,
        }
    }

    /// Converts a stored record into a persisted history entry.
    pub fn into_history_entry(self) -> HistoryEntry {
        let method = HttpMethod::from_str(&self.method).unwrap_or(HttpMethod::GET);
        let created_at = self.created_at.unwrap_or_else(Utc::now);

        let request = ApiRequest {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            url: self.url,
            headers: self.headers,
            params: self.params,
            body: self.request_body,
            created_at,
        };

        let response = self.response_status.map(|status| ApiResponse {
            status,
            status_text: self.response_status_text.unwrap_or_default(),
            headers: self.response_headers,
            body: self.response_body.unwrap_or_default(),
            elapsed_ms: self.response_time.unwrap_or(0),
            size_bytes: self.response_size.unwrap_or(0),
        });

        HistoryEntry {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: Some(self.name),
            persisted: true,
            request,
            response,
            created_at,
        }
    }
}

/// Errors from the remote store.
#[derive(Debug)]
pub enum RemoteError {
    /// The HTTP call to the store failed outright.
    Request(String),

    /// The store answered with a non-success status.
    Status(u16, String),

    /// The store's answer could not be decoded.
    Decode(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Request(msg) => write!(f, "Store request failed: {}", msg),
            RemoteError::Status(status, msg) => {
                write!(f, "Store rejected the request ({}): {}", status, msg)
            }
            RemoteError::Decode(msg) => write!(f, "Store reply could not be decoded: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Request(err.to_string())
    }
}

/// A capability over the saved-execution table.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Inserts a record and returns the stored row (with id and timestamps).
    async fn insert(&self, record: &SavedExecution) -> Result<SavedExecution, RemoteError>;

    /// Deletes the row with the given id.
    async fn delete_by_id(&self, id: &str) -> Result<(), RemoteError>;

    /// Lists up to `limit` rows, newest first by creation time.
    async fn list_recent(&self, limit: usize) -> Result<Vec<SavedExecution>, RemoteError>;
}

/// PostgREST-style HTTP implementation of the remote store.
#[derive(Debug, Clone)]
pub struct RestRemoteStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RestRemoteStore {
    /// Creates a store from a resolved configuration.
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::Status(status.as_u16(), body))
    }
}

#[async_trait]
impl RemoteStore for RestRemoteStore {
    async fn insert(&self, record: &SavedExecution) -> Result<SavedExecution, RemoteError> {
        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        let response = Self::check(response).await?;

        let mut rows: Vec<SavedExecution> = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        if rows.is_empty() {
            return Err(RemoteError::Decode(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(rows.remove(0))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RemoteError> {
        let response = self
            .authorize(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<SavedExecution>, RemoteError> {
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        let response = Self::check(response).await?;

        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}
