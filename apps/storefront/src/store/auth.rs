//! # Auth Operations
//!
//! ## Login Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  apiIntegration = testing "Attempting login..."      ──► Validation     │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  client.login(..).await          (no lock held; other operations run)  │
//! │      │                                                                  │
//! │      ├── Ok(session) ── auth = logged_in(session)    ──► Auth          │
//! │      │                  apiIntegration = success     ──► Validation     │
//! │      │                                                                  │
//! │      └── Err(e) ─────── auth untouched                                  │
//! │                         apiIntegration = failed e    ──► Validation     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two overlapping logins each write their own outcome; the one that
//! finishes last determines the final auth state and flag.

use tracing::{info, instrument, warn};

use storefront_auth::AuthResult;
use storefront_core::flags::feature;
use storefront_core::{AuthState, Session, ValidationStatus};

use super::Store;
use crate::state::StoreEvent;

impl Store {
    /// Authenticates against the auth service.
    ///
    /// On failure the auth slice is left exactly as it was, and the returned
    /// error carries the message for the login form.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        self.set_flag(
            feature::API_INTEGRATION,
            ValidationStatus::Testing,
            "Attempting login...",
        );

        match self.client.login(email, password).await {
            Ok(session) => {
                let replaced = self.auth.write(|auth| {
                    let previous = auth.user().map(|u| u.email.clone());
                    *auth = AuthState::logged_in(session.clone());
                    previous
                });
                if let Some(previous) = replaced {
                    info!(previous = %previous, "Replacing existing session");
                }
                info!(user_id = %session.user.id, "Login succeeded");
                self.publish(StoreEvent::Auth);

                self.set_flag(
                    feature::API_INTEGRATION,
                    ValidationStatus::Success,
                    "Login successful! API integration working.",
                );
                Ok(session)
            }
            Err(err) => {
                warn!(error = %err, "Login failed");
                self.set_flag(
                    feature::API_INTEGRATION,
                    ValidationStatus::Failed,
                    err.to_string(),
                );
                Err(err)
            }
        }
    }

    /// Drops the session. Idempotent; makes no network call.
    pub fn logout(&self) {
        let was_authenticated = self.auth.write(|auth| {
            let was = auth.is_authenticated();
            *auth = AuthState::logged_out();
            was
        });
        info!(was_authenticated, "Logged out");
        self.publish(StoreEvent::Auth);

        self.set_flag(
            feature::API_INTEGRATION,
            ValidationStatus::Testing,
            "Ready for API testing...",
        );
    }

    /// A copy of the auth slice.
    pub fn auth(&self) -> AuthState {
        self.auth.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.read(AuthState::is_authenticated)
    }
}
