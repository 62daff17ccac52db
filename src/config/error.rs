use thiserror::Error;

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key must be provided either directly or through the {0} environment variable")]
    MissingApiKey(String),

    #[error("Invalid API key format: {0}")]
    InvalidApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuildFailed(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
