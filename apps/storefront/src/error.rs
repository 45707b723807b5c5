//! # API Error Type
//!
//! Serializable error for the presentation layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  AuthError::Credential ───────────────┐                                 │
//! │  AuthError::Transport ────────────────┤                                 │
//! │  CoreError (cart rules) ──────────────┼──► ApiError { code, message }  │
//! │  ValidationError (input) ─────────────┤                                 │
//! │  ConfigError (startup) ───────────────┘                                 │
//! │                                                                         │
//! │  The presentation layer switches on `code`; `message` is display text. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use storefront_auth::AuthError;
use storefront_core::{CoreError, ValidationError};

use crate::config::ConfigError;

/// Error returned to the presentation layer.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_CREDENTIALS",
///   "message": "Invalid credentials"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The auth service rejected the login
    InvalidCredentials,

    /// The auth service could not be reached or answered garbage
    NetworkError,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Configuration could not be loaded
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// The message is the service's text without the kind prefix; the prefixed
/// form lives on the `apiIntegration` flag.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let code = match err {
            AuthError::Credential(_) => ErrorCode::InvalidCredentials,
            AuthError::Transport(_) => ErrorCode::NetworkError,
        };
        ApiError::new(code, err.message())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotInCart(_) => ApiError::cart(err.to_string()),
            CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
