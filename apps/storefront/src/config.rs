//! # Store Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_AUTH_URL=http://auth.internal:5000                      │
//! │     STOREFRONT_LANGUAGE=es                                             │
//! │     STOREFRONT_REQUEST_TIMEOUT_SECS=10                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOREFRONT_CONFIG, or                                             │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.storefront/ (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:5000, "en", no timeout                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! language = "en"
//!
//! [auth]
//! base_url = "http://localhost:5000"
//! request_timeout_secs = 10
//!
//! [startup]
//! styling_check_ms = 1000
//! routing_check_ms = 1500
//! featured_delay_ms = 1500
//! health_interval_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use storefront_auth::AuthConfig;
use storefront_core::validation::validate_language_code;
use storefront_core::DEFAULT_LANGUAGE;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Delays of the simulated startup checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// When `styling` flips to success.
    pub styling_check_ms: u64,

    /// When `routing` flips to success.
    pub routing_check_ms: u64,

    /// Simulated latency of the featured-products fetch.
    pub featured_delay_ms: u64,

    /// Period of the auth service health poll.
    pub health_interval_ms: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        StartupConfig {
            styling_check_ms: 1000,
            routing_check_ms: 1500,
            featured_delay_ms: 1500,
            health_interval_ms: 5000,
        }
    }
}

impl StartupConfig {
    pub fn styling_delay(&self) -> Duration {
        Duration::from_millis(self.styling_check_ms)
    }

    pub fn routing_delay(&self) -> Duration {
        Duration::from_millis(self.routing_check_ms)
    }

    pub fn featured_delay(&self) -> Duration {
        Duration::from_millis(self.featured_delay_ms)
    }

    pub fn health_interval(&self) -> Duration {
        Duration::from_millis(self.health_interval_ms)
    }
}

/// Everything needed to build a [`crate::Store`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Initial UI language code.
    pub language: String,

    pub auth: AuthConfig,

    pub startup: StartupConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            language: DEFAULT_LANGUAGE.to_string(),
            auth: AuthConfig::default(),
            startup: StartupConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file and environment.
    ///
    /// `config_path` wins over `$STOREFRONT_CONFIG`, which wins over the
    /// platform config directory. A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, logging and falling back to defaults on error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads `path` if it exists, otherwise returns defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks values that would otherwise fail later and less clearly.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_language_code(&self.language)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let url = &self.auth.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "auth.base_url must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.startup.health_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "startup.health_interval_ms must be greater than 0".into(),
            ));
        }

        if self.auth.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "auth.request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STOREFRONT_AUTH_URL") {
            debug!(url = %url, "Overriding auth URL from environment");
            self.auth.base_url = url;
        }

        if let Ok(secs) = std::env::var("STOREFRONT_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.auth.request_timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring non-numeric request timeout"),
            }
        }

        if let Ok(language) = std::env::var("STOREFRONT_LANGUAGE") {
            debug!(language = %language, "Overriding language from environment");
            self.language = language;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
