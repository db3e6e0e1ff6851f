//! Local ephemeral cache for history entries.
//!
//! The cache is a consumed capability holding one serialized payload: the
//! ephemeral entries as a JSON array. Reads and writes are synchronous and
//! treated as instantaneous. A corrupt payload decodes to an empty list with
//! a logged warning; cache problems are never fatal.

use super::models::HistoryEntry;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A synchronous store for the serialized ephemeral history.
pub trait CacheStore {
    /// Reads the stored payload, or `None` when nothing has been written.
    fn read_all(&self) -> Option<String>;

    /// Replaces the stored payload.
    fn write_all(&mut self, payload: &str) -> io::Result<()>;

    /// Erases the stored payload.
    fn clear(&mut self) -> io::Result<()>;
}

/// In-memory cache store, for tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheStore {
    payload: Option<String>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn read_all(&self) -> Option<String> {
        self.payload.clone()
    }

    fn write_all(&mut self, payload: &str) -> io::Result<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.payload = None;
        Ok(())
    }
}

/// File-backed cache store holding the payload in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CacheStore for FileCacheStore {
    fn read_all(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Some(payload),
            // Nothing written yet.
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("reading history cache failed: {}", err);
                None
            }
        }
    }

    fn write_all(&mut self, payload: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Decodes a cache payload into entries.
///
/// A corrupt payload is treated as empty: the error is logged and an empty
/// list returned, so startup never aborts on a bad cache.
pub fn decode_entries(payload: &str) -> Vec<HistoryEntry> {
    match serde_json::from_str::<Vec<HistoryEntry>>(payload) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("discarding corrupt history cache: {}", err);
            Vec::new()
        }
    }
}

/// Encodes entries into a cache payload.
pub fn encode_entries(entries: &[HistoryEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}
