//! # storefront-core: Pure Domain Logic for the Storefront
//!
//! This crate holds every rule of the storefront state store that can be
//! expressed without I/O: cart arithmetic, the authentication state shape,
//! validation flags, and input validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (external)                   │   │
//! │  │     Products page ──► Cart page ──► Login form ──► Dashboard    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads snapshots / calls operations     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Store (apps/storefront)                      │   │
//! │  │     login, logout, add_to_cart, change_language, ...            │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼────────────────────┐  │
//! │  │  ★ storefront-core (THIS) ★     │  │  storefront-auth            │  │
//! │  │  Money • Cart • AuthState       │  │  POST /login over HTTP      │  │
//! │  │  ValidationBoard • Language     │  │                             │  │
//! │  │  NO I/O • PURE FUNCTIONS        │  │                             │  │
//! │  └─────────────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Products, users, sessions and the authentication state
//! - [`cart`] - The shopping cart and its total invariant
//! - [`flags`] - Feature validation flags shown on the developer dashboard
//! - [`i18n`] - Supported interface languages
//! - [`catalog`] - The canned product list used by the demo pages
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, Product};
//!
//! let mut cart = Cart::new();
//! let phone = Product::new(1, "Smartphone", Money::from_cents(59_999));
//!
//! cart.add_item(&phone);
//! cart.add_item(&phone);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total().cents(), 119_998);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod flags;
pub mod i18n;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use flags::{ValidationBoard, ValidationFlag, ValidationStatus};
pub use i18n::Language;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity that `Cart::set_quantity` accepts for a single item.
///
/// `Cart::add_item` is not capped; it saturates instead of failing.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Language the store starts in.
pub const DEFAULT_LANGUAGE: &str = "en";
