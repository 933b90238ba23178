//! In-process history store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{decode, encode, HistoryError, HistoryStore, HISTORY_KEY};

/// Key-value store held in memory. Contents are lost on drop.
///
/// Documents are kept encoded, as a browser's local storage would keep them,
/// so corrupt content can be seeded with [`MemoryHistoryStore::with_raw`].
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose history document is `raw`, verbatim.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.documents().insert(HISTORY_KEY.to_string(), raw.into());
        store
    }

    /// Create a store already holding `entries`.
    pub fn with_entries(entries: &[&str]) -> Self {
        let owned: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        let raw = serde_json::to_string(&owned).unwrap_or_else(|_| "[]".to_string());
        Self::with_raw(raw)
    }

    /// The stored history document, if any.
    pub fn raw(&self) -> Option<String> {
        self.documents().get(HISTORY_KEY).cloned()
    }

    fn documents(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        match self.documents().get(HISTORY_KEY) {
            Some(raw) => decode(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[String]) -> Result<(), HistoryError> {
        let raw = encode(entries)?;
        self.documents().insert(HISTORY_KEY.to_string(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryHistoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_save_writes_json_array() {
        let store = MemoryHistoryStore::new();
        store
            .save(&["dune".to_string(), "heat".to_string()])
            .unwrap();
        assert_eq!(store.raw().unwrap(), r#"["dune","heat"]"#);
        assert_eq!(store.load().unwrap(), vec!["dune", "heat"]);
    }

    #[test]
    fn test_corrupt_document() {
        let store = MemoryHistoryStore::with_raw("{not json");
        assert!(matches!(store.load(), Err(HistoryError::Corrupt(_))));
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryHistoryStore::with_entries(&["a", "b"]);
        assert_eq!(store.load().unwrap(), vec!["a", "b"]);
    }
}
