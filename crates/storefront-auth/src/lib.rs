//! # storefront-auth: Authentication Service Client
//!
//! Wraps the external authentication service behind a small typed client.
//!
//! ## Modules
//! - [`client`] - `AuthClient` with `login` and `health`
//! - [`config`] - Base URL, endpoint paths, optional timeout
//! - [`protocol`] - JSON request/response bodies
//! - [`error`] - `AuthError` (credential vs. transport)
//!
//! ## Example
//! ```rust,no_run
//! use storefront_auth::{AuthClient, AuthConfig};
//!
//! # async fn run() -> Result<(), storefront_auth::AuthError> {
//! let client = AuthClient::new(AuthConfig::new("http://localhost:5000"))?;
//! let session = client.login("test@example.com", "securepassword123").await?;
//! println!("logged in as {}", session.user.email);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;

pub use client::AuthClient;
pub use config::{AuthConfig, DEFAULT_AUTH_URL};
pub use error::{AuthError, AuthResult};
pub use protocol::HealthStatus;
