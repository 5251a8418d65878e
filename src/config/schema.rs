use crate::error::NotifierError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Shortest on-screen time a notice can get
pub const MIN_NOTICE_TIMEOUT: Duration = Duration::from_millis(1);

/// Session events that can trigger a notification
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Permission,
    Complete,
    Error,
    Question,
}

impl EventKind {
    pub const ALL: [Self; 4] = [Self::Permission, Self::Complete, Self::Error, Self::Question];

    /// Key used for this event in the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permission => "permission",
            Self::Complete => "complete",
            Self::Error => "error",
            Self::Question => "question",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NotifierError::UnknownEvent(s.to_string()))
    }
}

/// Per-event notification setting
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventSetting {
    pub notification: bool,
}

impl Default for EventSetting {
    fn default() -> Self {
        Self {
            notification: default_true(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct EventSettings {
    pub permission: EventSetting,
    pub complete: EventSetting,
    pub error: EventSetting,
    pub question: EventSetting,
}

impl EventSettings {
    /// Every event set to the same enablement
    #[must_use]
    pub const fn uniform(notification: bool) -> Self {
        let setting = EventSetting { notification };
        Self {
            permission: setting,
            complete: setting,
            error: setting,
            question: setting,
        }
    }

    #[must_use]
    pub const fn get(&self, kind: EventKind) -> &EventSetting {
        match kind {
            EventKind::Permission => &self.permission,
            EventKind::Complete => &self.complete,
            EventKind::Error => &self.error,
            EventKind::Question => &self.question,
        }
    }

    pub fn get_mut(&mut self, kind: EventKind) -> &mut EventSetting {
        match kind {
            EventKind::Permission => &mut self.permission,
            EventKind::Complete => &mut self.complete,
            EventKind::Error => &mut self.error,
            EventKind::Question => &mut self.question,
        }
    }
}

/// Display text for each event
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventMessages {
    pub permission: String,
    pub complete: String,
    pub error: String,
    pub question: String,
}

impl EventMessages {
    #[must_use]
    pub fn get(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::Permission => &self.permission,
            EventKind::Complete => &self.complete,
            EventKind::Error => &self.error,
            EventKind::Question => &self.question,
        }
    }

    pub fn get_mut(&mut self, kind: EventKind) -> &mut String {
        match kind {
            EventKind::Permission => &mut self.permission,
            EventKind::Complete => &mut self.complete,
            EventKind::Error => &mut self.error,
            EventKind::Question => &mut self.question,
        }
    }
}

impl Default for EventMessages {
    fn default() -> Self {
        Self {
            permission: default_message(EventKind::Permission).to_string(),
            complete: default_message(EventKind::Complete).to_string(),
            error: default_message(EventKind::Error).to_string(),
            question: default_message(EventKind::Question).to_string(),
        }
    }
}

/// Fully-populated notifier configuration
///
/// Serializes with the same camelCase keys the config file uses, so a
/// serialized value can be fed back through the loader unchanged.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotifierConfig {
    pub notification: bool,
    /// Seconds a notification stays on screen, always > 0
    pub timeout: f64,
    pub show_project_name: bool,
    pub events: EventSettings,
    pub messages: EventMessages,
}

impl NotifierConfig {
    /// Whether notifications fire for `kind`
    #[must_use]
    pub const fn is_enabled(&self, kind: EventKind) -> bool {
        self.events.get(kind).notification
    }

    /// Message shown for `kind`
    #[must_use]
    pub fn message(&self, kind: EventKind) -> &str {
        self.messages.get(kind)
    }

    /// `timeout` as a [`Duration`], clamped to `[MIN_NOTICE_TIMEOUT, Duration::MAX]`
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        match Duration::try_from_secs_f64(self.timeout) {
            Ok(duration) => duration.max(MIN_NOTICE_TIMEOUT),
            Err(_) if self.timeout > 0.0 => {
                tracing::debug!("Timeout {}s exceeds Duration range, clamping", self.timeout);
                Duration::MAX
            }
            Err(_) => {
                tracing::warn!("Invalid timeout {}, using default", self.timeout);
                Duration::from_secs_f64(default_timeout())
            }
        }
    }
}

// Default value functions
pub(crate) const fn default_true() -> bool {
    true
}
pub(crate) const fn default_timeout() -> f64 {
    5.0
}
pub(crate) const fn default_message(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Permission => "Session needs permission",
        EventKind::Complete => "Session has finished",
        EventKind::Error => "Session encountered an error",
        EventKind::Question => "Session has a question",
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            notification: default_true(),
            timeout: default_timeout(),
            show_project_name: default_true(),
            events: EventSettings::default(),
            messages: EventMessages::default(),
        }
    }
}
