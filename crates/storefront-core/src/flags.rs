//! # Validation Flags
//!
//! Named status/message pairs shown on the developer-facing feature health
//! dashboard. They are purely observational: nothing else in the store reads
//! them to make decisions.
//!
//! ## Status Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   pending ──► testing ──┬──► success                                    │
//! │                         └──► failed                                     │
//! │                                                                         │
//! │   Any status may be overwritten by any other; last write wins.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::error::ValidationError;

/// Feature names tracked by the store out of the box.
pub mod feature {
    pub const APPLICATION: &str = "application";
    pub const STYLING: &str = "styling";
    pub const INTERNATIONALIZATION: &str = "internationalization";
    pub const API_INTEGRATION: &str = "apiIntegration";
    pub const ROUTING: &str = "routing";
    pub const STATE_MANAGEMENT: &str = "stateManagement";
}

// =============================================================================
// Validation Status
// =============================================================================

/// Status of a single validation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ValidationStatus {
    Pending,
    Testing,
    Success,
    Failed,
}

impl ValidationStatus {
    pub const ALL: [ValidationStatus; 4] = [
        ValidationStatus::Pending,
        ValidationStatus::Testing,
        ValidationStatus::Success,
        ValidationStatus::Failed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "pending",
            ValidationStatus::Testing => "testing",
            ValidationStatus::Success => "success",
            ValidationStatus::Failed => "failed",
        }
    }

    /// Icon the dashboard shows next to the flag.
    pub const fn icon(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "⏳",
            ValidationStatus::Testing => "🧪",
            ValidationStatus::Success => "✅",
            ValidationStatus::Failed => "❌",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ValidationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: ValidationStatus::ALL
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Validation Flag
// =============================================================================

/// One entry on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationFlag {
    pub name: String,
    pub status: ValidationStatus,
    pub message: String,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl ValidationFlag {
    pub fn new(name: impl Into<String>, status: ValidationStatus, message: impl Into<String>) -> Self {
        ValidationFlag {
            name: name.into(),
            status,
            message: message.into(),
            updated_at: Utc::now(),
        }
    }
}

// =============================================================================
// Validation Board
// =============================================================================

/// All flags, keyed by name, in the order they were first set.
///
/// Serializes as a JSON object `{ name: flag, ... }` so the presentation layer
/// can read `validationTests.apiIntegration` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationBoard {
    flags: Vec<ValidationFlag>,
}

impl ValidationBoard {
    /// An empty board.
    pub fn new() -> Self {
        ValidationBoard { flags: Vec::new() }
    }

    /// The board the store starts with.
    pub fn initial() -> Self {
        use ValidationStatus::{Success, Testing};

        let mut board = ValidationBoard::new();
        board.set(feature::APPLICATION, Success, "Storefront application running");
        board.set(feature::STYLING, Testing, "Checking responsive design...");
        board.set(feature::INTERNATIONALIZATION, Testing, "Testing language switching...");
        board.set(feature::API_INTEGRATION, Testing, "Connecting to auth service...");
        board.set(feature::ROUTING, Testing, "Testing navigation...");
        board.set(feature::STATE_MANAGEMENT, Success, "State store initialized");
        board
    }

    /// Overwrites the flag for `name`, creating it if absent.
    pub fn set(&mut self, name: &str, status: ValidationStatus, message: impl Into<String>) {
        let flag = ValidationFlag::new(name, status, message);
        match self.flags.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = flag,
            None => self.flags.push(flag),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ValidationFlag> {
        self.flags.iter().find(|f| f.name == name)
    }

    /// Status of `name`, if the flag exists.
    pub fn status(&self, name: &str) -> Option<ValidationStatus> {
        self.get(name).map(|f| f.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFlag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// True once no flag is still pending or testing.
    pub fn is_settled(&self) -> bool {
        self.flags
            .iter()
            .all(|f| matches!(f.status, ValidationStatus::Success | ValidationStatus::Failed))
    }
}

impl Serialize for ValidationBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.flags.len()))?;
        for flag in &self.flags {
            map.serialize_entry(&flag.name, flag)?;
        }
        map.end()
    }
}
