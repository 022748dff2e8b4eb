//! Authentication error types

/// Errors raised by a [`TokenProvider`](crate::auth::TokenProvider).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No access token was configured.
    #[error("No access token available")]
    MissingToken,

    /// The access token has expired and this provider cannot refresh it.
    #[error("Token expired: {message}")]
    TokenExpired { message: String },
}
