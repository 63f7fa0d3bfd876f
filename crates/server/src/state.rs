use marquee_core::{Config, FavoritesSet, SanitizedConfig, SearchPaginator};

/// Shared application state
pub struct AppState {
    config: Config,
    paginator: SearchPaginator,
    favorites: FavoritesSet,
}

impl AppState {
    pub fn new(config: Config, paginator: SearchPaginator, favorites: FavoritesSet) -> Self {
        Self {
            config,
            paginator,
            favorites,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn paginator(&self) -> &SearchPaginator {
        &self.paginator
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }
}
