//! Remote store configuration.
//!
//! The remote store is optional: it only exists when both the base URL and
//! the API key are configured. Resolution happens once at startup; consumers
//! hold the resulting `Option` instead of re-checking the environment.

use serde::{Deserialize, Serialize};

/// Environment variable holding the remote store base URL.
pub const REMOTE_URL_VAR: &str = "API_WORKBENCH_REMOTE_URL";

/// Environment variable holding the remote store API key.
pub const REMOTE_KEY_VAR: &str = "API_WORKBENCH_REMOTE_KEY";

/// Environment variable overriding the saved-execution table name.
pub const REMOTE_TABLE_VAR: &str = "API_WORKBENCH_REMOTE_TABLE";

/// Default table name for saved executions.
pub const DEFAULT_TABLE: &str = "api_executions";

/// Connection settings for the remote persistence store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the store's HTTP API.
    pub base_url: String,

    /// API key, sent as both `apikey` and bearer token.
    pub api_key: String,

    /// Table holding saved executions.
    pub table: String,
}

impl RemoteConfig {
    /// Creates a configuration with the default table name.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Resolves the configuration from the environment.
    ///
    /// # Returns
    ///
    /// `Some(RemoteConfig)` when both the URL and key variables are set and
    /// non-blank, `None` otherwise - in which case remote-dependent
    /// operations degrade gracefully.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(REMOTE_URL_VAR).ok()?;
        let api_key = std::env::var(REMOTE_KEY_VAR).ok()?;
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return None;
        }

        let table = std::env::var(REMOTE_TABLE_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Some(Self {
            base_url,
            api_key,
            table,
        })
    }
}
