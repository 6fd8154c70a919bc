//! Configuration error types.

use thiserror::Error;

/// Error raised while loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("cannot parse config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}
