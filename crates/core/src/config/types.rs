use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;

use crate::history::DEFAULT_HISTORY_VIEW_LIMIT;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog document.
    #[serde(default = "default_catalog_source")]
    pub source: String,
    /// Timeout for fetching a remote catalog (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs as u64)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_catalog_source() -> String {
    "movies.json".to_string()
}

fn default_timeout() -> u32 {
    10
}

/// Where search history is persisted
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HistoryBackend {
    #[default]
    Sqlite,
    /// Not persisted across restarts.
    Memory,
}

/// History store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: HistoryBackend,
    /// SQLite database path (sqlite backend only)
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: HistoryBackend::default(),
            path: default_history_path(),
        }
    }
}

fn default_history_path() -> PathBuf {
    PathBuf::from("cinestream.db")
}

/// Search behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Keystroke quiet period before a live search runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Number of recent searches shown for blank input
    #[serde(default = "default_history_view_limit")]
    pub history_view_limit: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            history_view_limit: default_history_view_limit(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_history_view_limit() -> usize {
    DEFAULT_HISTORY_VIEW_LIMIT
}

/// Static front-end configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// Directory with index.html and assets
    #[serde(default = "default_frontend_dir")]
    pub dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: default_frontend_dir(),
        }
    }
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("public")
}
