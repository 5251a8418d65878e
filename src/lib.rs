pub mod config;
pub mod error;
pub mod notifications;

pub use config::{get_message, is_event_notification_enabled, load_config, EventKind, NotifierConfig};
pub use error::{NotifierError, Result};
