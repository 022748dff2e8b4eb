//! Remote service failure types

use std::fmt;

use super::ApiError;
use super::api::is_retryable_status;

/// One underlying cause reported by the remote service.
///
/// The service can reject a single request for several reasons at once (an
/// unknown field and a malformed condition, for example). Each reason becomes
/// one detail, kept in the order the service reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceErrorDetail {
    /// The error code (e.g., "queryError: UNRECOGNIZED_FIELD").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ServiceErrorDetail {
    /// Creates a new error detail with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ServiceErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

/// A failed search request.
///
/// Carries the service-assigned request id (when the failure got far enough
/// to receive one) and every underlying error description, in order. Transport
/// failures are represented the same way, with the transport error as the
/// single description and as the [`source`](std::error::Error::source).
#[derive(Debug)]
pub struct RemoteServiceError {
    request_id: Option<String>,
    status: Option<u16>,
    errors: Vec<ServiceErrorDetail>,
    transport: Option<ApiError>,
}

impl RemoteServiceError {
    /// Creates a service-side failure.
    pub fn new(request_id: Option<String>, errors: Vec<ServiceErrorDetail>) -> Self {
        Self {
            request_id,
            status: None,
            errors,
            transport: None,
        }
    }

    /// Sets the HTTP status the failure arrived with.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the request id, keeping an existing one.
    pub(crate) fn or_request_id(mut self, request_id: Option<String>) -> Self {
        if self.request_id.is_none() {
            self.request_id = request_id;
        }
        self
    }

    /// Returns the request id assigned by the service, if known.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the HTTP status code, if the failure came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns every underlying error, in the order reported.
    pub fn errors(&self) -> &[ServiceErrorDetail] {
        &self.errors
    }

    /// Returns the underlying error messages, in the order reported.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// Returns the transport error, if the failure happened below the service.
    pub fn transport(&self) -> Option<&ApiError> {
        self.transport.as_ref()
    }

    /// Returns `true` if an external caller could sensibly retry.
    pub fn is_retryable(&self) -> bool {
        match (&self.transport, self.status) {
            (Some(transport), _) => transport.is_retryable(),
            (None, Some(status)) => is_retryable_status(status),
            (None, None) => false,
        }
    }
}

impl fmt::Display for RemoteServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.request_id {
            Some(id) => write!(f, "Request ID {} failed", id)?,
            None => write!(f, "Remote request failed")?,
        }
        match self.errors.as_slice() {
            [] => Ok(()),
            [only] => write!(f, ": {}", only),
            [first, rest @ ..] => write!(f, ": {} (and {} more)", first, rest.len()),
        }
    }
}

impl std::error::Error for RemoteServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.transport
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<ApiError> for RemoteServiceError {
    fn from(err: ApiError) -> Self {
        Self {
            request_id: None,
            status: err.status_code(),
            errors: vec![ServiceErrorDetail::new(err.code(), err.to_string())],
            transport: Some(err),
        }
    }
}
