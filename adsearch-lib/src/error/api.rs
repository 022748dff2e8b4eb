//! Transport error types

use std::time::Duration;

/// Errors raised by the HTTP transport underneath a search request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP response whose body could not be decoded as a
    /// service failure.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// Network error during the call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The page fetch did not complete in time.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Failed to parse a response body.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Short machine-readable code for this failure kind.
    pub fn code(&self) -> String {
        match self {
            Self::Http { status, .. } => format!("HTTP_{}", status),
            Self::Network(_) => "NETWORK".to_string(),
            Self::Timeout(_) => "TIMEOUT".to_string(),
            Self::Parse { .. } => "PARSE".to_string(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => is_retryable_status(*status),
            Self::Network(_) => true,
            Self::Timeout(_) => true,
            Self::Parse { .. } => false,
        }
    }
}

pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::http(503, "unavailable").code(), "HTTP_503");
        assert_eq!(ApiError::Timeout(Duration::from_secs(1)).code(), "TIMEOUT");
        assert_eq!(ApiError::parse_with_body("bad json", "{").code(), "PARSE");
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::http(429, "").is_retryable());
        assert!(ApiError::http(503, "").is_retryable());
        assert!(!ApiError::http(400, "").is_retryable());
        assert!(!ApiError::parse_with_body("bad", "{").is_retryable());
        assert_eq!(ApiError::http(404, "").status_code(), Some(404));
    }
}
