//! History orchestration over the local cache and the optional remote store.
//!
//! [`HistoryService`] owns the merged in-memory list and drives the five
//! reconciliation operations: load, append-on-send, delete, clear, and save.
//! The remote store is resolved once at construction; when absent, every
//! remote-dependent operation degrades gracefully instead of branching
//! throughout the code.

use super::local::{self, CacheStore};
use super::models::{HistoryEntry, HistoryError};
use super::reconcile;
use super::remote::{RemoteStore, SavedExecution, RECENT_LIMIT};
use crate::models::{ApiRequest, ApiResponse};

/// Outcome of a [`HistoryService::load`].
///
/// A remote failure during load is non-fatal: the list is populated from
/// the local cache and the error is carried here for the UI to report.
#[derive(Debug)]
pub struct LoadReport {
    /// Number of entries in the merged list.
    pub loaded: usize,

    /// The remote failure, if the persisted fetch did not succeed.
    pub remote_error: Option<HistoryError>,
}

/// Outcome of a [`HistoryService::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// This many ephemeral entries were removed.
    Cleared(usize),

    /// There was nothing ephemeral to remove; informational, not an error.
    NothingToClear,
}

/// The history engine: a merged, deduplicated, size-bounded list backed by
/// a local cache and an optional remote store.
pub struct HistoryService<C: CacheStore, R: RemoteStore> {
    cache: C,
    remote: Option<R>,
    entries: Vec<HistoryEntry>,
}

impl<C: CacheStore, R: RemoteStore> HistoryService<C, R> {
    /// Creates a service over the given stores with an empty list.
    ///
    /// Call [`load`](Self::load) to populate it from the backing stores.
    pub fn new(cache: C, remote: Option<R>) -> Self {
        Self {
            cache,
            remote,
            entries: Vec::new(),
        }
    }

    /// The current merged history list, newest-first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Whether a remote store is configured.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Loads history from both stores and merges it.
    ///
    /// The cache is read first (a corrupt payload decodes to empty, logged);
    /// then, when configured, the remote store contributes up to the 50 most
    /// recent persisted records. A remote failure degrades to local-only and
    /// is reported in the returned [`LoadReport`].
    pub async fn load(&mut self) -> LoadReport {
        let ephemeral = self
            .cache
            .read_all()
            .map(|payload| local::decode_entries(&payload))
            .unwrap_or_default();

        let (persisted, remote_error) = match &self.remote {
            Some(store) => match store.list_recent(RECENT_LIMIT).await {
                Ok(records) => (
                    records
                        .into_iter()
                        .map(SavedExecution::into_history_entry)
                        .collect(),
                    None,
                ),
                Err(err) => {
                    log::warn!("loading persisted history failed: {}", err);
                    (Vec::new(), Some(HistoryError::Remote(err.to_string())))
                }
            },
            None => (Vec::new(), None),
        };

        self.entries = reconcile::merge_loaded(persisted, ephemeral);
        LoadReport {
            loaded: self.entries.len(),
            remote_error,
        }
    }

    /// Records a completed send as a new ephemeral entry.
    ///
    /// The entry is prepended, the ephemeral cap enforced, and the cache
    /// rewritten. Returns the new entry.
    pub fn record_send(&mut self, request: ApiRequest, response: ApiResponse) -> &HistoryEntry {
        let entry = HistoryEntry::ephemeral(request, Some(response));
        self.entries = reconcile::append_entry(std::mem::take(&mut self.entries), entry);
        self.write_cache();
        &self.entries[0]
    }

    /// Returns the entry with the given id, for replaying into the editor.
    ///
    /// Non-mutating: the caller copies the request fields into its editable
    /// state and shows the stored response, if any.
    pub fn replay(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Deletes the entry with the given id.
    ///
    /// Persisted entries are deleted remotely first; if that fails, the
    /// in-memory list is left untouched and the error returned. Ephemeral
    /// entries (and persisted ones when no remote store is configured) are
    /// removed locally. An unknown id is a no-op.
    pub async fn delete(&mut self, id: &str) -> Result<(), HistoryError> {
        let persisted = match self.entries.iter().find(|entry| entry.id == id) {
            Some(entry) => entry.persisted,
            None => return Ok(()),
        };

        if persisted {
            if let Some(store) = &self.remote {
                store
                    .delete_by_id(id)
                    .await
                    .map_err(|err| HistoryError::Remote(err.to_string()))?;
            }
        }

        self.entries = reconcile::remove_entry(std::mem::take(&mut self.entries), id);
        self.write_cache();
        Ok(())
    }

    /// Removes every ephemeral entry and erases the cache.
    ///
    /// Persisted entries are untouched. When nothing was ephemeral, the
    /// outcome is [`ClearOutcome::NothingToClear`] so the UI can show an
    /// informational notice instead of an error.
    pub fn clear(&mut self) -> ClearOutcome {
        let (remaining, removed) = reconcile::clear_ephemeral(std::mem::take(&mut self.entries));
        self.entries = remaining;

        if let Err(err) = self.cache.clear() {
            log::warn!("erasing history cache failed: {}", err);
        }

        if removed == 0 {
            ClearOutcome::NothingToClear
        } else {
            ClearOutcome::Cleared(removed)
        }
    }

    /// Persists a request/response pair under a user-supplied name.
    ///
    /// Validates the name before any I/O, requires a configured remote
    /// store, and aborts without touching the list when the insert fails.
    /// On success the stored record is prepended as a persisted entry; an
    /// ephemeral duplicate of the same execution is left in place.
    pub async fn save(
        &mut self,
        request: &ApiRequest,
        response: Option<&ApiResponse>,
        name: &str,
    ) -> Result<&HistoryEntry, HistoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HistoryError::Validation(
                "a name is required to save an execution".to_string(),
            ));
        }

        let Some(store) = &self.remote else {
            return Err(HistoryError::Unconfigured);
        };

        let record = SavedExecution::from_execution(name, request, response);
        let stored = store
            .insert(&record)
            .await
            .map_err(|err| HistoryError::Remote(err.to_string()))?;

        let entry = stored.into_history_entry();
        self.entries = reconcile::append_entry(std::mem::take(&mut self.entries), entry);
        Ok(&self.entries[0])
    }

    /// Rewrites the cache with the current ephemeral entries.
    ///
    /// Cache problems are logged, never propagated.
    fn write_cache(&mut self) {
        let ephemeral: Vec<HistoryEntry> = self
            .entries
            .iter()
            .filter(|entry| !entry.persisted)
            .cloned()
            .collect();

        match local::encode_entries(&ephemeral) {
            Ok(payload) => {
                if let Err(err) = self.cache.write_all(&payload) {
                    log::warn!("writing history cache failed: {}", err);
                }
            }
            Err(err) => log::warn!("encoding history cache failed: {}", err),
        }
    }
}
