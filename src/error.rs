use thiserror::Error;

/// Main error type for the notifier
///
/// Loading never returns these to callers; they exist so the strict read/parse
/// step can report what went wrong before the loader falls back to defaults.
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Config error: {0}\n\nTroubleshooting:\n- Check config file: ~/.config/opencode/opencode-notifier.json\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("Failed to parse config: {0}\n\nTroubleshooting:\n- The file must be valid JSON\n- Remove trailing commas and comments")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown event '{0}'. Must be one of: permission, complete, error, question")]
    UnknownEvent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotifierError>;
