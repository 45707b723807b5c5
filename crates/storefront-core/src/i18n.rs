//! # Languages
//!
//! Interface languages the presentation layer ships translations for.
//! Translation tables themselves live with the presentation layer; the store
//! only records which code is active.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// A language with a bundled translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    Es,
    Zh,
}

impl Language {
    pub const SUPPORTED: [Language; 3] = [Language::En, Language::Es, Language::Zh];

    /// ISO 639-1 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Zh => "zh",
        }
    }

    /// Label used on the language switcher.
    pub const fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
            Language::Zh => "中文",
        }
    }

    /// Looks up a supported language by code, ignoring case and region
    /// suffixes (`es-MX` resolves to `es`).
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        Language::SUPPORTED
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ValidationError::NotAllowed {
            field: "language".to_string(),
            allowed: Language::SUPPORTED
                .iter()
                .map(|l| l.code().to_string())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code("ZH"), Some(Language::Zh));
        assert_eq!(Language::from_code("es-MX"), Some(Language::Es));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default().code(), crate::DEFAULT_LANGUAGE);
    }
}
