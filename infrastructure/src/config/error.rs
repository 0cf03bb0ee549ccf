use super::file_config::ConfigValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration failures. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("Failed to read secrets file {}: {source}", .path.display())]
    Secrets {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error(
        "No API key found. Set the {env} environment variable, or add {key} to secrets.toml"
    )]
    MissingCredential { env: String, key: &'static str },
}
