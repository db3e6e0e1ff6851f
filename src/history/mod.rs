//! Merged, deduplicated, size-bounded request history.
//!
//! History entries come from two backing stores: a local ephemeral cache
//! (bounded to 50 entries, evicted oldest-first) and an optional remote
//! persistence store (explicitly saved, never evicted implicitly). The
//! reconciler keeps one consistent newest-first list across both.
//!
//! # Example
//!
//! ```ignore
//! let mut history = HistoryService::new(cache, Some(remote));
//! history.load().await;
//! history.record_send(request, response);
//! ```

pub mod local;
pub mod models;
pub mod reconcile;
pub mod remote;
pub mod service;

pub use local::{CacheStore, FileCacheStore, MemoryCacheStore};
pub use models::{HistoryEntry, HistoryError};
pub use reconcile::EPHEMERAL_CAP;
pub use remote::{RemoteError, RemoteStore, RestRemoteStore, SavedExecution, RECENT_LIMIT};
pub use service::{ClearOutcome, HistoryService, LoadReport};
