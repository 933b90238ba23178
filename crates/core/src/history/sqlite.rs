//! SQLite-backed history store.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{decode, encode, HistoryError, HistoryStore, HISTORY_KEY};

/// History kept as one JSON document in a SQLite key-value table.
pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
    key: String,
}

impl SqliteHistoryStore {
    /// Open (or create) the database file and its table.
    pub fn new(path: &Path) -> Result<Self, HistoryError> {
        let conn = Connection::open(path).map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, HistoryError> {
        let conn =
            Connection::open_in_memory().map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, HistoryError> {
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            key: HISTORY_KEY.to_string(),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), HistoryError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        Ok(())
    }

    /// Store the raw document, bypassing encoding (for recovery tests).
    pub fn put_raw(&self, raw: &str) -> Result<(), HistoryError> {
        let conn = self.lock()?;
        Self::upsert(&conn, &self.key, raw)
    }

    fn upsert(conn: &Connection, key: &str, value: &str) -> Result<(), HistoryError> {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, HistoryError> {
        self.conn
            .lock()
            .map_err(|_| HistoryError::Database("connection lock poisoned".to_string()))
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        let conn = self.lock()?;
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![&self.key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| HistoryError::Database(e.to_string()))?;

        match raw {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[String]) -> Result<(), HistoryError> {
        let raw = encode(entries)?;
        let conn = self.lock()?;
        Self::upsert(&conn, &self.key, &raw)
    }
}
