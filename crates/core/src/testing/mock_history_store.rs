//! Mock history store for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::history::{HistoryError, HistoryStore};

/// Mock implementation of the HistoryStore trait.
///
/// Provides controllable behavior for testing:
/// - Seed stored entries
/// - Record every saved snapshot for assertions
/// - Simulate load and save failures
///
/// # Example
///
/// ```rust,ignore
/// use cinestream_core::testing::MockHistoryStore;
///
/// let store = Arc::new(MockHistoryStore::failing());
/// let mut engine = SearchEngine::new(catalog, store.clone());
/// engine.search("dune");
/// assert_eq!(store.save_attempts(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockHistoryStore {
    stored: Mutex<Vec<String>>,
    snapshots: Mutex<Vec<Vec<String>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    save_attempts: AtomicUsize,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose loads and saves always fail.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_fail_loads(true);
        store.set_fail_saves(true);
        store
    }

    /// A store that already holds `entries`.
    pub fn with_entries(entries: &[&str]) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = entries.iter().map(|s| s.to_string()).collect();
        store
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of save calls, including failed ones.
    pub fn save_attempts(&self) -> usize {
        self.save_attempts.load(Ordering::SeqCst)
    }

    /// Every successfully saved snapshot, oldest first.
    pub fn snapshots(&self) -> Vec<Vec<String>> {
        self.snapshots.lock().unwrap().clone()
    }

    /// The currently stored entries.
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }
}

impl HistoryStore for MockHistoryStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(HistoryError::Database("mock load failure".to_string()));
        }
        Ok(self.stored())
    }

    fn save(&self, entries: &[String]) -> Result<(), HistoryError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(HistoryError::Database("mock save failure".to_string()));
        }
        *self.stored.lock().unwrap() = entries.to_vec();
        self.snapshots.lock().unwrap().push(entries.to_vec());
        Ok(())
    }
}
