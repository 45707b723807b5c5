//! # Auth Client
//!
//! One HTTP round trip per login. The client holds no session state; the
//! store decides what to do with the result.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                                 │
//! │      │                                                                  │
//! │      ├── empty field? ──────────────────────────► Credential (no I/O)  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  POST /login ──── send fails ───────────────────► Transport            │
//! │      │                                                                  │
//! │      ├── 2xx ── body parses? ── yes ────────────► Ok(Session)          │
//! │      │                     └── no ──────────────► Transport            │
//! │      │                                                                  │
//! │      └── other ── body is JSON? ── yes ─────────► Credential(error)    │
//! │                              └── no ────────────► Transport            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::Client;
use tracing::{debug, instrument, warn};

use storefront_core::validation::validate_required;
use storefront_core::Session;

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::protocol::{ErrorResponse, HealthStatus, LoginRequest, LoginResponse};

/// Client for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    config: AuthConfig,
    http: Client,
}

impl AuthClient {
    /// Creates a client for the given configuration.
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(config: AuthConfig) -> AuthResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(AuthClient { config, http })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Exchanges credentials for a session.
    ///
    /// Makes at most one request. The password never reaches the logs.
    #[instrument(skip(self, password), fields(url = %self.config.login_url()))]
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        validate_required("email", email).map_err(|e| AuthError::Credential(e.to_string()))?;
        validate_required("password", password)
            .map_err(|e| AuthError::Credential(e.to_string()))?;

        let response = self
            .http
            .post(self.config.login_url())
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Auth service responded");

        if status.is_success() {
            let body: LoginResponse = response.json().await.map_err(|e| {
                AuthError::Transport(format!("invalid login response: {e}"))
            })?;
            return body.into_session();
        }

        let body: ErrorResponse = response.json().await.map_err(|e| {
            AuthError::Transport(format!("unreadable error response ({status}): {e}"))
        })?;
        let message = body.message();
        warn!(%status, error = %message, "Login rejected");
        Err(AuthError::Credential(message))
    }

    /// Queries the service's health endpoint.
    #[instrument(skip(self), fields(url = %self.config.health_url()))]
    pub async fn health(&self) -> AuthResult<HealthStatus> {
        let response = self
            .http
            .get(self.config.health_url())
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .map_err(|e| AuthError::Transport(format!("invalid health response: {e}")))
    }
}
