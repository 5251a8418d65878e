//! Configuration module for opencode-notifier
//!
//! Loads config from `~/.config/opencode/opencode-notifier.json`.
//! Falls back to embedded defaults if the file doesn't exist, can't be read,
//! or isn't valid JSON. Partial configs are merged with defaults field by field.
//!
//! # Example
//!
//! ```no_run
//! use opencode_notifier::config::{self, EventKind};
//!
//! let config = config::load_config();
//! if config::is_event_notification_enabled(&config, EventKind::Complete) {
//!     println!("{}", config::get_message(&config, EventKind::Complete));
//! }
//! ```

pub mod merge;
pub mod schema;

pub use schema::{EventKind, EventSetting, NotifierConfig};

use crate::error::{NotifierError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the config file: `<home>/.config/opencode/opencode-notifier.json`
///
/// Resolves relative to the working directory if no home directory is known.
#[must_use]
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("opencode")
        .join("opencode-notifier.json")
}

/// Load the effective config from the default location
#[must_use]
pub fn load_config() -> NotifierConfig {
    NotifierConfig::load()
}

#[must_use]
pub const fn is_event_notification_enabled(config: &NotifierConfig, kind: EventKind) -> bool {
    config.is_enabled(kind)
}

#[must_use]
pub fn get_message(config: &NotifierConfig, kind: EventKind) -> &str {
    config.message(kind)
}

impl NotifierConfig {
    /// Load from [`config_path`], never failing
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load from `path`, falling back to defaults on any failure
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(raw)) => merge::merge(&raw, &Self::default()),
            Ok(None) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Read and parse the raw config document at `path`
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    /// - Returns error if the file exists but can't be read as UTF-8 text
    /// - Returns error if the contents aren't valid JSON
    /// - Returns error if the top-level value isn't a JSON object
    pub fn try_load_from(path: &Path) -> Result<Option<Value>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&content)?;

        if !raw.is_object() {
            return Err(NotifierError::Config(format!(
                "Expected a JSON object at the top level of {}",
                path.display()
            )));
        }

        Ok(Some(raw))
    }

    /// Parse and merge a JSON document, falling back to defaults on syntax errors
    #[must_use]
    pub fn from_json_str(content: &str) -> Self {
        match serde_json::from_str::<Value>(content) {
            Ok(raw) => merge::merge(&raw, &Self::default()),
            Err(e) => {
                tracing::warn!("Ignoring invalid config JSON: {e}");
                Self::default()
            }
        }
    }
}
