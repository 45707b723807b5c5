//! # Auth Error Types
//!
//! A login attempt ends in exactly one of two failure kinds.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Login Failure Kinds                               │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │  Credential                  │  │  Transport                   │    │
//! │  │                              │  │                              │    │
//! │  │  Service answered and said   │  │  Service unreachable, or the │    │
//! │  │  no; message is its `error`  │  │  reply could not be parsed   │    │
//! │  │  field verbatim              │  │                              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  Both are recoverable: the caller may simply try again.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Why a login did not produce a session.
///
/// The `Display` output is the text the dashboard shows on the
/// `apiIntegration` flag; [`AuthError::message`] is the bare message handed
/// back to the login form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The service rejected the credentials or the request.
    #[error("Login failed: {0}")]
    Credential(String),

    /// The service could not be reached or answered with something unusable.
    #[error("Network error: {0}")]
    Transport(String),
}

impl AuthError {
    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Credential(msg) | AuthError::Transport(msg) => msg,
        }
    }

    pub fn is_credential(&self) -> bool {
        matches!(self, AuthError::Credential(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AuthError::Transport(_))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
