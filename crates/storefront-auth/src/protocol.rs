//! # Wire Types
//!
//! JSON bodies exchanged with the authentication service.
//!
//! ## Login
//! ```text
//! Request                        Success (200)
//! ───────                        ─────────────
//! {                              {
//!   "email": "a@b.c",              "user_id": "4f1c...",
//!   "password": "..."              "email": "a@b.c",
//! }                                "access_token": "eyJ..."
//!                                }
//!
//!                                Failure (4xx/5xx)
//!                                ─────────────────
//!                                { "error": "Invalid credentials" }
//! ```
//!
//! The full service variant nests the user instead:
//! `{ "access_token": "...", "user": { "id": "...", "email": "..." } }`.
//! Both shapes are accepted. Field-validation failures carry an object in
//! `error` (`{"email": ["Not a valid email address."]}`), which is rendered
//! as compact JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{Session, User};

use crate::error::{AuthError, AuthResult};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Nested user object of the full service variant.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBody {
    pub id: Value,
    pub email: String,
}

/// Body of a successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,

    #[serde(default)]
    pub user_id: Option<Value>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub user: Option<UserBody>,
}

impl LoginResponse {
    /// Converts the response into a session, preferring the flat fields.
    ///
    /// A response with neither shape is malformed and reported as a
    /// transport error: the service answered, but not in a usable way.
    pub fn into_session(self) -> AuthResult<Session> {
        let user = match (self.user_id.and_then(id_to_string), self.email, self.user) {
            (Some(id), Some(email), _) => User { id, email },
            (_, _, Some(nested)) => User {
                id: id_to_string(nested.id).ok_or_else(|| malformed("user.id"))?,
                email: nested.email,
            },
            (None, _, None) => return Err(malformed("user_id")),
            (Some(_), None, None) => return Err(malformed("email")),
        };

        Ok(Session {
            user,
            token: self.access_token,
        })
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorResponse {
    /// The message to surface verbatim to the caller.
    pub fn message(self) -> String {
        match self.error {
            Some(Value::String(msg)) => msg,
            Some(Value::Null) | None => "Unknown error".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

fn id_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn malformed(field: &str) -> AuthError {
    AuthError::Transport(format!("malformed login response: missing {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> AuthResult<Session> {
        serde_json::from_value::<LoginResponse>(value)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .into_session()
    }

    #[test]
    fn test_flat_response() {
        let session = parse(json!({
            "user_id": "u-42",
            "email": "test@example.com",
            "access_token": "jwt"
        }))
        .unwrap();
        assert_eq!(session.user.id, "u-42");
        assert_eq!(session.user.email, "test@example.com");
        assert_eq!(session.token, "jwt");
    }

    #[test]
    fn test_nested_response_with_numeric_id() {
        let session = parse(json!({
            "access_token": "jwt",
            "user": { "id": 7, "email": "test@example.com" }
        }))
        .unwrap();
        assert_eq!(session.user.id, "7");
    }

    #[test]
    fn test_missing_user_is_transport_error() {
        let err = parse(json!({ "access_token": "jwt" })).unwrap_err();
        assert!(err.is_transport());
        assert!(err.message().contains("user_id"));

        let err = parse(json!({ "access_token": "jwt", "user_id": "u" })).unwrap_err();
        assert!(err.message().contains("email"));
    }

    #[test]
    fn test_error_message_shapes() {
        let plain: ErrorResponse = serde_json::from_value(json!({"error": "Invalid credentials"})).unwrap();
        assert_eq!(plain.message(), "Invalid credentials");

        let nested: ErrorResponse =
            serde_json::from_value(json!({"error": {"email": ["Not a valid email address."]}})).unwrap();
        assert_eq!(nested.message(), r#"{"email":["Not a valid email address."]}"#);

        let missing: ErrorResponse = serde_json::from_value(json!({"detail": "nope"})).unwrap();
        assert_eq!(missing.message(), "Unknown error");
    }

    #[test]
    fn test_login_request_body() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.c",
            password: "pw",
        })
        .unwrap();
        assert_eq!(body, json!({"email": "a@b.c", "password": "pw"}));
    }
}
