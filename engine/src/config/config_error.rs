use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("config cache lock is poisoned")]
    Poisoned,
}
