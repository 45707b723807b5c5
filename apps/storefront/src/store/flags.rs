//! # Validation Flags & Language
//!
//! The dashboard board and the current UI language. Both are plain
//! last-write-wins slices: any caller may overwrite any flag.

use tracing::{debug, info, warn};

use storefront_core::flags::feature;
use storefront_core::validation::{validate_flag_name, validate_language_code, ValidationResult};
use storefront_core::{Language, ValidationBoard, ValidationFlag, ValidationStatus};

use super::Store;
use crate::state::StoreEvent;

impl Store {
    /// Overwrites the flag `name`, creating it if absent.
    pub fn update_validation_test(
        &self,
        name: &str,
        status: ValidationStatus,
        message: impl Into<String>,
    ) {
        self.set_flag(name, status, message);
    }

    /// Same as [`Store::update_validation_test`], for untyped input such as
    /// a status string coming from the presentation layer.
    ///
    /// Rejects malformed names and unknown statuses without touching the
    /// board.
    pub fn try_update_validation_test(
        &self,
        name: &str,
        status: &str,
        message: impl Into<String>,
    ) -> ValidationResult<()> {
        validate_flag_name(name)?;
        let status: ValidationStatus = status.parse()?;
        self.set_flag(name, status, message);
        Ok(())
    }

    /// A copy of the whole board.
    pub fn validation_tests(&self) -> ValidationBoard {
        self.validation.snapshot()
    }

    pub fn validation_test(&self, name: &str) -> Option<ValidationFlag> {
        self.validation.read(|board| board.get(name).cloned())
    }

    /// Records `code` as the current language and marks
    /// internationalization as working.
    ///
    /// Any code is accepted; codes outside the supported set only log a
    /// warning.
    pub fn change_language(&self, code: &str) {
        if let Err(e) = validate_language_code(code) {
            warn!(code, error = %e, "Malformed language code");
        } else if Language::from_code(code).is_none() {
            warn!(code, "Unsupported language code");
        }

        self.language.write(|lang| *lang = code.to_string());
        info!(code, "Language changed");
        self.publish(StoreEvent::Language {
            code: code.to_string(),
        });

        self.set_flag(
            feature::INTERNATIONALIZATION,
            ValidationStatus::Success,
            format!("Language changed to {code}"),
        );
    }

    /// The current language code as last set.
    pub fn language(&self) -> String {
        self.language.snapshot()
    }

    pub(super) fn set_flag(
        &self,
        name: &str,
        status: ValidationStatus,
        message: impl Into<String>,
    ) {
        let message = message.into();
        debug!(name, %status, message = %message, "validation flag");
        self.validation.write(|board| board.set(name, status, message));
        self.publish(StoreEvent::Validation {
            name: name.to_string(),
        });
    }
}
