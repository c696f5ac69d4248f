use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
    #[error("Failed to serialize stats: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Logger(#[from] templog::errors::Error),
}
