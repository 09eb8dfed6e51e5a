pub mod config;
pub mod filter_map;
pub mod provider_config;
pub mod search;

pub use config::{load_provider_config, load_provider_config_from_env, ConfigError};
pub use filter_map::FilterNameMap;
pub use provider_config::ProviderConfig;
pub use search::{
    FilterDescription, FilterKind, FilterOption, FilterValue, SearchRequest, SearchResult,
    SortOrder,
};
