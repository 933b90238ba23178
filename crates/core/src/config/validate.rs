use super::{types::Config, ConfigError};
use crate::history::MAX_HISTORY_ENTRIES;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog source is set
/// - Debounce delay is not 0
/// - History view limit is within 1..=MAX_HISTORY_ENTRIES
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.source.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.source cannot be empty".to_string(),
        ));
    }

    if config.search.debounce_ms == 0 {
        return Err(ConfigError::ValidationError(
            "search.debounce_ms cannot be 0".to_string(),
        ));
    }

    let limit = config.search.history_view_limit;
    if limit == 0 || limit > MAX_HISTORY_ENTRIES {
        return Err(ConfigError::ValidationError(format!(
            "search.history_view_limit must be between 1 and {}, got {}",
            MAX_HISTORY_ENTRIES, limit
        )));
    }

    Ok(())
}
