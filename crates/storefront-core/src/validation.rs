//! # Validation Module
//!
//! Input validation for values that arrive from the presentation layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (form `required` attributes)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (THIS MODULE)                                          │
//! │  └── required fields, flag names, language codes                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Auth service                                                 │
//! │  └── email format, credential check (authoritative)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Email format and credential checks stay with the auth service; the store
//! only refuses to send empty fields.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted validation flag name.
pub const MAX_FLAG_NAME_LEN: usize = 64;

/// Rejects empty or whitespace-only values.
///
/// ```rust
/// use storefront_core::validation::validate_required;
///
/// assert!(validate_required("password", "hunter22").is_ok());
/// assert!(validate_required("password", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a validation flag name.
pub fn validate_flag_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.len() > MAX_FLAG_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_FLAG_NAME_LEN,
        });
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a BCP 47-ish language code such as `en` or `es-MX`.
pub fn validate_language_code(code: &str) -> ValidationResult<()> {
    validate_required("language", code)?;

    let well_formed = code.len() <= 8
        && code.split('-').all(|part| {
            !part.is_empty() && part.len() <= 4 && part.chars().all(|c| c.is_ascii_alphanumeric())
        });

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "language".to_string(),
            reason: "expected a code like 'en' or 'es-MX'".to_string(),
        });
    }
    Ok(())
}
