use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog section exists (enforced by serde)
/// - Server port is not 0
/// - CORS origins are explicit (no `*`, credentials are allowed)
/// - OMDb API key is set and its timeout is not 0
/// - Search limits are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    for origin in &config.server.cors_origins {
        if origin.trim() == "*" {
            return Err(ConfigError::ValidationError(
                "server.cors_origins cannot contain \"*\"; list each origin explicitly"
                    .to_string(),
            ));
        }
    }

    // Catalog validation
    let omdb = &config.catalog.omdb;
    if omdb.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.omdb.api_key is required (or set OMDB_API_KEY)".to_string(),
        ));
    }
    if omdb.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.omdb.timeout_secs cannot be 0".to_string(),
        ));
    }

    // Search validation
    if config.search.max_upstream_pages == 0 {
        return Err(ConfigError::ValidationError(
            "search.max_upstream_pages cannot be 0".to_string(),
        ));
    }
    if config.search.default_page_size < 1 {
        return Err(ConfigError::ValidationError(
            "search.default_page_size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
