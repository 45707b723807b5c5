//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core (this file)                                           │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-auth                                                       │
//! │  └── AuthError        - Credential / transport failures of login       │
//! │                                                                         │
//! │  apps/storefront                                                       │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding to the cart and updating flags never fail; only the optional cart
//! edits and input parsing produce these errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The product id has no line in the cart.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(u64),

    /// Requested quantity exceeds [`crate::MAX_ITEM_QUANTITY`].
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. an email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value outside the accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1500,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1500 exceeds maximum allowed (999)");
        assert_eq!(
            CoreError::ItemNotInCart(7).to_string(),
            "Product 7 is not in the cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["pending".to_string(), "success".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "status must be one of: [\"pending\", \"success\"]"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
