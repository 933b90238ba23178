pub mod catalog;
pub mod config;
pub mod debounce;
pub mod history;
pub mod metrics;
pub mod search;
pub mod testing;

pub use catalog::{
    genre_label, load_catalog, section_title, source_for, try_load_catalog, BrowseFilter, Catalog,
    CatalogError, CatalogItem, CatalogSource, FileCatalogSource, HttpCatalogSource, Sections,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    FrontendConfig, HistoryBackend, HistoryConfig, SearchConfig, ServerConfig,
};
pub use debounce::{classify_input, Debouncer, InputAction, DEFAULT_DEBOUNCE};
pub use history::{
    HistoryError, HistoryStore, MemoryHistoryStore, SearchHistory, SqliteHistoryStore,
    DEFAULT_HISTORY_VIEW_LIMIT, HISTORY_KEY, MAX_HISTORY_ENTRIES,
};
pub use search::{
    fuzzy_match, match_score, GenreMatch, PersonMatch, PersonRole, RankedResults, SearchEngine,
    SearchView, TitleMatch,
};
