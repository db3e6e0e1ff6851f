//! Pure state transitions over the history list.
//!
//! Every operation takes the current list by value and returns the next one,
//! leaving the invariants intact: entries are ordered newest-first (the
//! persisted block first after a load), ids are unique, at most
//! [`EPHEMERAL_CAP`] ephemeral entries are retained, and persisted entries
//! are never evicted implicitly.

use super::models::HistoryEntry;
use std::collections::HashSet;

/// Maximum number of ephemeral entries retained in the list.
///
/// Persisted entries do not count against this cap and are never evicted by
/// it; only explicit deletion removes them.
pub const EPHEMERAL_CAP: usize = 50;

/// Merges freshly loaded entries from both stores into one list.
///
/// Persisted entries surface first (they are the curated set), followed by
/// ephemeral entries; each block is sorted newest-first. Identity is solely
/// by id: should both stores ever produce the same id, the first (persisted)
/// occurrence is kept so id uniqueness holds. The ephemeral cap is applied
/// to the result.
pub fn merge_loaded(
    mut persisted: Vec<HistoryEntry>,
    mut ephemeral: Vec<HistoryEntry>,
) -> Vec<HistoryEntry> {
    persisted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ephemeral.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut seen = HashSet::new();
    let merged: Vec<HistoryEntry> = persisted
        .into_iter()
        .chain(ephemeral)
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();

    enforce_cap(merged)
}

/// Prepends a new entry and enforces the ephemeral cap.
///
/// The oldest ephemeral entries (furthest from the front) are evicted once
/// more than [`EPHEMERAL_CAP`] of them are present; persisted entries pass
/// through untouched.
pub fn append_entry(mut list: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    list.insert(0, entry);
    enforce_cap(list)
}

/// Removes the entry with the given id; a no-op if absent.
pub fn remove_entry(list: Vec<HistoryEntry>, id: &str) -> Vec<HistoryEntry> {
    list.into_iter().filter(|entry| entry.id != id).collect()
}

/// Removes every ephemeral entry, leaving persisted ones untouched.
///
/// # Returns
///
/// The remaining list and the number of entries removed.
pub fn clear_ephemeral(list: Vec<HistoryEntry>) -> (Vec<HistoryEntry>, usize) {
    let before = list.len();
    let remaining: Vec<HistoryEntry> = list.into_iter().filter(|entry| entry.persisted).collect();
    let removed = before - remaining.len();
    (remaining, removed)
}

/// Keeps every persisted entry and the first [`EPHEMERAL_CAP`] ephemeral
/// entries in list order.
fn enforce_cap(list: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut ephemeral_seen = 0;
    list.into_iter()
        .filter(|entry| {
            if entry.persisted {
                true
            } else {
                ephemeral_seen += 1;
                ephemeral_seen <= EPHEMERAL_CAP
            }
        })
        .collect()
}
