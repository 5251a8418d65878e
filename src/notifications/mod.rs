use crate::config::{EventKind, NotifierConfig};
use serde::{Serialize, Serializer};
use std::path::Path;
use std::time::Duration;

const APP_NAME: &str = "OpenCode";

/// A notification ready to hand to a desktop notification daemon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub event: EventKind,
    pub summary: String,
    pub body: String,
    /// Written as fractional seconds, matching the config file
    #[serde(serialize_with = "serialize_secs")]
    pub timeout: Duration,
}

fn serialize_secs<S: Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(timeout.as_secs_f64())
}

/// Composes notices from the loaded config
pub struct NotificationManager {
    config: NotifierConfig,
}

impl NotificationManager {
    #[must_use]
    pub const fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Build the notice for `event`, or `None` if the event is disabled
    ///
    /// The project name goes into the summary only when `showProjectName` is set.
    #[must_use]
    pub fn notice(&self, event: EventKind, project: Option<&str>) -> Option<Notice> {
        if !self.config.is_enabled(event) {
            tracing::debug!("Notifications disabled for {event}");
            return None;
        }

        let summary = match project.map(str::trim) {
            Some(name) if self.config.show_project_name && !name.is_empty() => {
                format!("{APP_NAME} ({name})")
            }
            _ => APP_NAME.to_string(),
        };

        Some(Notice {
            event,
            summary,
            body: self.config.message(event).to_string(),
            timeout: self.config.timeout_duration(),
        })
    }
}

/// Project name for a working directory: its last path component
#[must_use]
pub fn project_name_from_dir(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
