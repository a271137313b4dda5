//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the client library.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Transport**: [`Network`](AppError::Network), [`Decode`](AppError::Decode)
//! - **HTTP status**: [`Unauthorized`](AppError::Unauthorized), [`NotFound`](AppError::NotFound),
//!   [`Server`](AppError::Server), [`Api`](AppError::Api)
//! - **Shape**: [`UnexpectedResponse`](AppError::UnexpectedResponse) when the backend answered
//!   with neither a typed success nor a typed error body
//! - **Local**: [`Validation`](AppError::Validation), [`Config`](AppError::Config)
//!
//! ## Usage Pattern
//!
//! ```rust
//! use storefront::core::error::AppError;
//!
//! fn validate_page_size(size: u32) -> Result<u32, AppError> {
//!     if size == 0 {
//!         return Err(AppError::Validation("Page size must be positive".to_string()));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(validate_page_size(0).is_err());
//! ```
//!
//! ## Surfacing to the loader
//!
//! The paged loader never returns `AppError` to its consumer. Every variant is
//! flattened to `LoadOutcome::Error { message }` using the `Display` text, so
//! the category survives only as advisory message prefix.

use reqwest::StatusCode;
use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant includes a descriptive message. The `#[error]` attribute from
/// `thiserror` provides the `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use storefront::core::error::AppError;
///
/// let err = AppError::Network("connection refused".to_string());
/// assert_eq!(err.to_string(), "Network error: connection refused");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Request never produced a response (DNS, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// HTTP 401. The bearer token is missing, expired or rejected.
    #[error("Unauthorized access: {0}")]
    Unauthorized(String),

    /// HTTP 404.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP 5xx.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status carrying a readable error body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Backend answered with neither a typed success nor a typed error.
    #[error("Unexpected result: {0}")]
    UnexpectedResponse(String),

    /// Local input validation failure (query parameters, page size).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use storefront::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Map a non-success HTTP status and the backend's message to a variant.
    ///
    /// `message` is `None` when the error body could not be parsed, which
    /// yields [`AppError::UnexpectedResponse`] for statuses without a
    /// dedicated variant.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let code = status.as_u16();
        let text = message
            .clone()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());

        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(text),
            StatusCode::NOT_FOUND => AppError::NotFound(text),
            s if s.is_server_error() => AppError::Server { status: code, message: text },
            _ => match message {
                Some(message) => AppError::Api { status: code, message },
                None => AppError::UnexpectedResponse(format!("status {} with unreadable body", code)),
            },
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    ///
    /// Used by consumers to decide whether to offer a retry action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Server { .. } | AppError::UnexpectedResponse(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
