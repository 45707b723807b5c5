//! # Store
//!
//! The single owner of client-side application state.
//!
//! ## Operations by Slice
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Operations                                │
//! │                                                                         │
//! │  auth.rs                cart.rs               flags.rs                  │
//! │  ───────                ───────               ────────                  │
//! │  login (async)          add_to_cart           update_validation_test    │
//! │  logout                 remove_from_cart      change_language           │
//! │                         set_quantity                                    │
//! │                         clear_cart                                      │
//! │                                                                         │
//! │  Every mutation publishes a StoreEvent naming the slice it touched.    │
//! │  Reads return clones; callers never hold a lock.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod flags;

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::info;

use storefront_auth::{AuthClient, AuthResult};
use storefront_core::{AuthState, Cart, ValidationBoard, DEFAULT_LANGUAGE};

use crate::config::StoreConfig;
use crate::state::{EventBus, Slice, StoreEvent};

/// Application state plus the client used by `login`.
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
#[derive(Debug)]
pub struct Store {
    auth: Slice<AuthState>,
    cart: Slice<Cart>,
    validation: Slice<ValidationBoard>,
    language: Slice<String>,
    events: EventBus,
    client: AuthClient,
}

/// Point-in-time copy of every slice, serialized for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub auth: AuthState,
    pub cart: Cart,
    pub validation_tests: ValidationBoard,
    pub current_language: String,
}

impl Store {
    /// Builds a store in its initial state from configuration.
    pub fn new(config: &StoreConfig) -> AuthResult<Self> {
        let client = AuthClient::new(config.auth.clone())?;
        Ok(Store::with_client(client, config.language.clone()))
    }

    /// Builds a store around an existing client.
    ///
    /// An empty `language` falls back to English.
    pub fn with_client(client: AuthClient, language: impl Into<String>) -> Self {
        let mut language = language.into();
        if language.is_empty() {
            language = DEFAULT_LANGUAGE.to_string();
        }
        info!(
            auth_url = %client.config().base_url,
            language = %language,
            "Store initialized"
        );

        Store {
            auth: Slice::new(AuthState::logged_out()),
            cart: Slice::new(Cart::new()),
            validation: Slice::new(ValidationBoard::initial()),
            language: Slice::new(language),
            events: EventBus::new(),
            client,
        }
    }

    /// Registers an observer. Events published before this call are not
    /// replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    /// Copies every slice.
    ///
    /// Slices are locked one at a time, so a snapshot taken while another
    /// task mutates may mix states from either side of that mutation.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            auth: self.auth.snapshot(),
            cart: self.cart.snapshot(),
            validation_tests: self.validation.snapshot(),
            current_language: self.language.snapshot(),
        }
    }

    fn publish(&self, event: StoreEvent) {
        self.events.publish(event);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use storefront_auth::AuthConfig;
    use storefront_core::flags::feature;
    use storefront_core::ValidationStatus;

    pub(crate) fn offline_store() -> Store {
        let client = AuthClient::new(AuthConfig::new("http://127.0.0.1:1")).unwrap();
        Store::with_client(client, "en")
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = offline_store().snapshot();

        assert!(!snapshot.auth.is_authenticated());
        assert!(snapshot.cart.is_empty());
        assert_eq!(snapshot.current_language, "en");
        assert_eq!(snapshot.validation_tests.len(), 6);
        assert_eq!(
            snapshot.validation_tests.status(feature::APPLICATION),
            Some(ValidationStatus::Success)
        );
        assert_eq!(
            snapshot.validation_tests.status(feature::API_INTEGRATION),
            Some(ValidationStatus::Testing)
        );
    }

    #[test]
    fn test_empty_language_falls_back() {
        let client = AuthClient::new(AuthConfig::default()).unwrap();
        let store = Store::with_client(client, "");
        assert_eq!(store.language(), "en");
    }

    #[test]
    fn test_snapshot_json_keys() {
        let json = serde_json::to_value(offline_store().snapshot()).unwrap();

        assert_eq!(json["auth"]["isAuthenticated"], false);
        assert_eq!(json["cart"]["total"], 0);
        assert_eq!(json["currentLanguage"], "en");
        assert_eq!(json["validationTests"]["routing"]["status"], "testing");
    }
}
