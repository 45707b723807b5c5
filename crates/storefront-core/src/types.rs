//! # Domain Types
//!
//! Products, users and the authentication state of the store.
//!
//! ## Authentication State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            login() succeeds                                             │
//! │   ┌───────────┐ ───────────────────► ┌───────────┐                     │
//! │   │ LoggedOut │                      │ LoggedIn  │ ──┐ login() again   │
//! │   └───────────┘ ◄─────────────────── └───────────┘ ◄─┘ (overwrites)    │
//! │                      logout()                                           │
//! │                                                                         │
//! │   Failed logins leave the state exactly as it was.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `AuthState` can only be built through [`AuthState::logged_out`] and
//! [`AuthState::logged_in`], so `is_authenticated` is true exactly when both
//! a user and a token are present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_required, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// Highest accepted unit price: $10,000,000.00.
///
/// A line at this price times `u32::MAX` units still fits in an `i64`.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// A product offered on the products page or the landing page.
///
/// The price is always within `0..=MAX_PRICE_CENTS`, whichever way the
/// product was built, so a cart of products can never total below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "ProductRecord")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier; cart lines are unique by this id.
    id: u64,

    /// Display name.
    name: String,

    /// Unit price in cents.
    price: Money,

    /// Marketing blurb shown on the landing page.
    description: Option<String>,
}

impl Product {
    /// Creates a product, clamping the price into `0..=MAX_PRICE_CENTS`.
    ///
    /// Meant for trusted data such as the built-in catalog; use
    /// [`Product::try_new`] for anything that came from outside.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        let cents = price.cents().clamp(0, MAX_PRICE_CENTS);
        Product {
            id,
            name: name.into(),
            price: Money::from_cents(cents),
            description: None,
        }
    }

    /// Creates a product, rejecting an empty name or an out-of-range price.
    pub fn try_new(id: u64, name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_required("name", &name)?;
        validate_price(price)?;
        Ok(Product {
            id,
            name,
            price,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Unchecked wire form of [`Product`].
#[derive(Debug, Clone, Deserialize)]
struct ProductRecord {
    id: u64,
    name: String,
    price: Money,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = Product::try_new(record.id, record.name, record.price)?;
        Ok(match record.description {
            Some(description) => product.with_description(description),
            None => product,
        })
    }
}

fn validate_price(price: Money) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&price.cents()) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }
    Ok(())
}

// =============================================================================
// User & Session
// =============================================================================

/// The authenticated user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// User id issued by the auth service (a UUID string in practice).
    pub id: String,

    /// Email the user logged in with.
    pub email: String,
}

/// The result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub user: User,

    /// Bearer token returned by the auth service.
    pub token: String,
}

// =============================================================================
// Auth State
// =============================================================================

/// The authentication slice of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthState {
    is_authenticated: bool,
    user: Option<User>,
    token: Option<String>,
    #[ts(as = "Option<String>")]
    logged_in_at: Option<DateTime<Utc>>,
}

impl AuthState {
    /// The initial, logged-out value.
    pub const fn logged_out() -> Self {
        AuthState {
            is_authenticated: false,
            user: None,
            token: None,
            logged_in_at: None,
        }
    }

    /// An authenticated state holding the given session.
    pub fn logged_in(session: Session) -> Self {
        AuthState {
            is_authenticated: true,
            user: Some(session.user),
            token: Some(session.token),
            logged_in_at: Some(Utc::now()),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[inline]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// When the current session was established.
    #[inline]
    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::logged_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user: User {
                id: "u-1".to_string(),
                email: "test@example.com".to_string(),
            },
            token: "jwt".to_string(),
        }
    }

    #[test]
    fn test_logged_out_has_nothing() {
        let state = AuthState::logged_out();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_logged_in_holds_user_and_token() {
        let state = AuthState::logged_in(session());
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.email.as_str()), Some("test@example.com"));
        assert_eq!(state.token(), Some("jwt"));
        assert!(state.logged_in_at().is_some());
    }

    #[test]
    fn test_try_new_rejects_negative_and_huge_prices() {
        let err = Product::try_new(1, "Refund", Money::from_cents(-500)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));

        assert!(Product::try_new(1, "Big", Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
        assert!(Product::try_new(1, "", Money::from_cents(100)).is_err());

        let ok = Product::try_new(1, "Free sample", Money::zero()).unwrap();
        assert_eq!(ok.price(), Money::zero());
    }

    #[test]
    fn test_new_clamps_price() {
        assert_eq!(
            Product::new(1, "Refund", Money::from_cents(-500)).price(),
            Money::zero()
        );
        assert_eq!(
            Product::new(1, "Big", Money::from_cents(i64::MAX)).price().cents(),
            MAX_PRICE_CENTS
        );
    }

    #[test]
    fn test_deserialize_validates_price() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Smartphone",
            "price": 69_999,
            "description": "Latest flagship device"
        }))
        .unwrap();
        assert_eq!(product.price().cents(), 69_999);
        assert_eq!(product.description(), Some("Latest flagship device"));

        let negative = serde_json::from_value::<Product>(serde_json::json!({
            "id": 1,
            "name": "Refund",
            "price": -500
        }));
        assert!(negative.is_err());
    }

    #[test]
    fn test_auth_state_serializes_camel_case() {
        let json = serde_json::to_value(AuthState::logged_out()).unwrap();
        assert_eq!(json["isAuthenticated"], false);
        assert!(json["user"].is_null());
        assert!(json["token"].is_null());
    }
}
