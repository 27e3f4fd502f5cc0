//! Error type for calls to the authentication service.

use std::fmt;

/// Category of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, connect, TLS, broken body).
    Network,
    /// The service answered, but not with the expected status or payload.
    Auth,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Auth => write!(f, "auth"),
        }
    }
}

/// Structured error from the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// HTTP status, when the service answered
    pub status: Option<u16>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    /// Creates a transport-level error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates an error for an unexpected HTTP status.
    pub fn http_status(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::Auth,
            message: format!("Request failed with status code {status}"),
            status: Some(status),
        }
    }

    /// Creates an error for a success status other than the one expected.
    ///
    /// The transport accepted the response, so there is no status text to show.
    pub fn unexpected_status(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::Auth,
            message: "An error has occurred!".to_string(),
            status: Some(status),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::http_status(status.as_u16());
        }
        Self::network(format!("Network error: {err}"))
    }
}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
