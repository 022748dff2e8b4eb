//! Configuration error types

/// Errors raised while loading or applying client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was not provided.
    #[error("Missing required setting {key}")]
    Missing { key: &'static str },

    /// A setting was provided but could not be used.
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    /// The env file could not be read or parsed.
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// The service endpoint is not a valid base URL.
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates a new invalid value error.
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}
