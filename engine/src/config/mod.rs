mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod engine_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_config::{
    ConnectFourConfig, EngineConfig, MAX_BOARD_SIZE, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH, TicTacToeConfig,
};
pub use validate::Validate;
