//! Error types for configuration

use thiserror::Error;

/// Rejected or unreadable settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid resolution {width}x{height}: both sides must be positive")]
    InvalidResolution { width: i32, height: i32 },

    #[error("unknown overlay position '{0}'")]
    UnknownAnchor(String),

    #[error("unknown station type '{0}'")]
    UnknownStation(String),

    #[error("refresh interval {minutes} min is outside {min}..={max}")]
    RefreshIntervalOutOfRange { minutes: u32, min: u32, max: u32 },

    #[error("station URL is required")]
    MissingApiUrl,

    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
