pub mod catalog;
pub mod config;
pub mod favorites;
pub mod search;
pub mod testing;

pub use catalog::{
    CatalogError, CatalogItem, CatalogProvider, OmdbClient, OmdbConfig, ProviderPage,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    FavoritesConfig, SanitizedConfig, SearchConfig, ServerConfig,
};
pub use favorites::{
    create_favorites, FavoritesError, FavoritesSet, FavoritesStore, FlushWriter, JsonFileStore,
    StoreError,
};
pub use search::{PagedResult, SearchError, SearchPaginator, DEFAULT_MAX_UPSTREAM_PAGES};
