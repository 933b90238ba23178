//! Search history - recent queries, most recent first.
//!
//! History is kept in memory by [`SearchHistory`] and written in full to a
//! [`HistoryStore`] after every change.

mod memory;
mod sqlite;

pub use memory::MemoryHistoryStore;
pub use sqlite::SqliteHistoryStore;

use thiserror::Error;

/// Key the history document is stored under.
pub const HISTORY_KEY: &str = "cineStreamSearchHistory";

/// Maximum number of remembered queries.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Number of entries the search panel shows.
pub const DEFAULT_HISTORY_VIEW_LIMIT: usize = 5;

/// Errors for history persistence.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt history document: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Persistent backing for the history document.
pub trait HistoryStore: Send + Sync {
    /// Read the stored queries. An absent document is an empty list.
    fn load(&self) -> Result<Vec<String>, HistoryError>;

    /// Overwrite the stored document with `entries`.
    fn save(&self, entries: &[String]) -> Result<(), HistoryError>;
}

/// Decode a stored history document.
pub(crate) fn decode(raw: &str) -> Result<Vec<String>, HistoryError> {
    serde_json::from_str(raw).map_err(|e| HistoryError::Corrupt(e.to_string()))
}

/// Encode history for storage.
pub(crate) fn encode(entries: &[String]) -> Result<String, HistoryError> {
    serde_json::to_string(entries).map_err(|e| HistoryError::Serialization(e.to_string()))
}

/// Ordered, deduplicated, bounded list of past queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping blanks and repeats and keeping at
    /// most [`MAX_HISTORY_ENTRIES`].
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut kept: Vec<String> = Vec::with_capacity(MAX_HISTORY_ENTRIES);
        for entry in entries {
            if entry.trim().is_empty() || kept.contains(&entry) {
                continue;
            }
            kept.push(entry);
            if kept.len() == MAX_HISTORY_ENTRIES {
                break;
            }
        }
        Self { entries: kept }
    }

    /// Move `query` to the front, inserting it if absent.
    ///
    /// Returns false (and changes nothing) for blank queries.
    pub fn push(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        true
    }

    /// Remove `query`. Returns whether anything was removed.
    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != query);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Up to `limit` entries, most recent first.
    pub fn recent(&self, limit: usize) -> &[String] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
