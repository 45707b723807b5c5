//! # Auth Client Configuration
//!
//! Where the authentication service lives and how long to wait for it.
//!
//! ## Configuration Sources
//! 1. Explicit values passed by the caller
//! 2. Environment variables (`STOREFRONT_AUTH_URL`, `STOREFRONT_REQUEST_TIMEOUT_SECS`)
//! 3. Defaults (`http://localhost:5000`, no timeout)

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default base URL of the auth service in local development.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5000";

/// Configuration for [`crate::AuthClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the login endpoint.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Path of the health endpoint.
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Whole-request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            base_url: default_base_url(),
            login_path: default_login_path(),
            health_path: default_health_path(),
            request_timeout_secs: None,
        }
    }
}

impl AuthConfig {
    /// Config pointing at `base_url` with default paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        AuthConfig {
            base_url: base_url.into(),
            ..AuthConfig::default()
        }
    }

    /// Builds a config from an explicit URL, falling back to the environment
    /// and then to defaults.
    pub fn from_env_or(base_url: Option<String>) -> Self {
        AuthConfig {
            base_url: base_url
                .or_else(|| std::env::var("STOREFRONT_AUTH_URL").ok())
                .unwrap_or_else(default_base_url),
            request_timeout_secs: std::env::var("STOREFRONT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            ..AuthConfig::default()
        }
    }

    pub fn login_url(&self) -> String {
        self.endpoint(&self.login_path)
    }

    pub fn health_url(&self) -> String {
        self.endpoint(&self.health_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
