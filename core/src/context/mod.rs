mod config;
mod error;

pub use config::{
    AppConfig, AppConfigExt, Color, ConfigStore, DEFAULT_API_URL,
    DEFAULT_REFRESH_INTERVAL_MINUTES, MAX_REFRESH_INTERVAL_MINUTES, MIN_REFRESH_INTERVAL_MINUTES,
    OverlayAnchor, OverlayConfig, Resolution, StationConfig, StationKind, overlay_colors,
};
pub use error::ConfigError;
