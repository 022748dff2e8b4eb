//! Error types

mod api;
mod auth;
mod config;
mod remote;

pub use api::*;
pub use auth::*;
pub use config::*;
pub use remote::*;

/// Errors returned by every fallible operation in this crate.
///
/// Nothing is recovered internally: transport failures, service failures and
/// malformed records all propagate to the caller, which decides whether to
/// report, retry or abort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller supplied an invalid value (bad customer id, zero page size, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote service, or the transport to it, failed.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),

    /// The service returned a record with an unexpected shape.
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    /// The token provider could not supply credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing formatted output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a data integrity error.
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity(message.into())
    }

    /// Returns the remote service failure, if this is one.
    pub fn as_remote(&self) -> Option<&RemoteServiceError> {
        match self {
            Self::Remote(remote) => Some(remote),
            _ => None,
        }
    }

    /// Returns `true` if an external caller could sensibly retry the request.
    ///
    /// This crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        self.as_remote().is_some_and(RemoteServiceError::is_retryable)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Remote(RemoteServiceError::from(err))
    }
}
