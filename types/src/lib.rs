//! Shared configuration types for ON AIR
//!
//! This crate contains the serializable settings and the small value types
//! shared between the schedule core (onair-core), the layout engine
//! (onair-overlay) and the host binary.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color, one byte per channel
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Static colors for each overlay text role
pub mod overlay_colors {
    use super::Color;

    pub const TITLE: Color = [255, 255, 0, 255]; // Yellow
    pub const TIME: Color = [255, 255, 255, 255]; // White
    pub const PRESENTER: Color = [120, 180, 255, 255]; // Light blue
    pub const DESCRIPTION: Color = [200, 200, 200, 255]; // Light gray
    pub const BORDER: Color = [128, 128, 128, 200]; // Gray
    pub const BACKGROUND: Color = [0, 0, 0, 255]; // Black, opacity applied separately

    /// Background opacity (roughly 50%)
    pub const BACKGROUND_OPACITY: u8 = 128;
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay Anchor
// ─────────────────────────────────────────────────────────────────────────────

/// Named screen position the overlay box is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayAnchor {
    #[default]
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl OverlayAnchor {
    pub const ALL: [OverlayAnchor; 8] = [
        OverlayAnchor::TopLeft,
        OverlayAnchor::TopMiddle,
        OverlayAnchor::TopRight,
        OverlayAnchor::MiddleLeft,
        OverlayAnchor::MiddleRight,
        OverlayAnchor::BottomLeft,
        OverlayAnchor::BottomMiddle,
        OverlayAnchor::BottomRight,
    ];

    /// Settings key, e.g. `"bottom-right"`
    pub fn key(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopMiddle => "top-middle",
            Self::TopRight => "top-right",
            Self::MiddleLeft => "middle-left",
            Self::MiddleRight => "middle-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomMiddle => "bottom-middle",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Human readable name for settings screens
    pub fn label(&self) -> &'static str {
        match self {
            Self::TopLeft => "Top Left",
            Self::TopMiddle => "Top Middle",
            Self::TopRight => "Top Right",
            Self::MiddleLeft => "Middle Left",
            Self::MiddleRight => "Middle Right",
            Self::BottomLeft => "Bottom Left",
            Self::BottomMiddle => "Bottom Middle",
            Self::BottomRight => "Bottom Right",
        }
    }

    /// Look up an anchor by settings key or label (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|anchor| {
            anchor.key().eq_ignore_ascii_case(key) || anchor.label().eq_ignore_ascii_case(key)
        })
    }
}

impl fmt::Display for OverlayAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Screen resolution of the window the overlay is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

impl Resolution {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Station Kind
// ─────────────────────────────────────────────────────────────────────────────

/// Station profile tag; selects the schedule parser for a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    /// ORF Sound stations (Ö1, FM4, Ö3, ...)
    #[default]
    Orf,
}

impl StationKind {
    pub const ALL: [StationKind; 1] = [StationKind::Orf];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Orf => "orf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Orf => "ORF Sound",
        }
    }

    /// Look up a station kind by key or label (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key) || kind.label().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_API_URL: &str = "https://audioapi.orf.at/oe1/api/json/current/broadcasts";
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: u32 = 10;
pub const MIN_REFRESH_INTERVAL_MINUTES: u32 = 5;
pub const MAX_REFRESH_INTERVAL_MINUTES: u32 = 60;

fn default_true() -> bool {
    true
}
fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_station_kind() -> String {
    StationKind::default().key().to_string()
}
fn default_refresh_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL_MINUTES
}
fn default_overlay_position() -> String {
    OverlayAnchor::default().key().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted host settings.
///
/// Values are stored as entered; `onair-core` validates them into the
/// immutable snapshots handed to each refresh. Anchor and station are kept as
/// strings so an unknown value in the file only invalidates that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_station_kind")]
    pub station_kind: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_minutes: u32,
    #[serde(default = "default_true")]
    pub overlay_enabled: bool,
    #[serde(default = "default_overlay_position")]
    pub overlay_position: String,
    #[serde(default)]
    pub resolution: Resolution,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            station_kind: default_station_kind(),
            refresh_interval_minutes: DEFAULT_REFRESH_INTERVAL_MINUTES,
            overlay_enabled: true,
            overlay_position: default_overlay_position(),
            resolution: Resolution::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_lookup_accepts_key_and_label() {
        assert_eq!(OverlayAnchor::from_key("bottom-right"), Some(OverlayAnchor::BottomRight));
        assert_eq!(OverlayAnchor::from_key("Top Middle"), Some(OverlayAnchor::TopMiddle));
        assert_eq!(OverlayAnchor::from_key(" MIDDLE-LEFT "), Some(OverlayAnchor::MiddleLeft));
        assert_eq!(OverlayAnchor::from_key("center"), None);
    }

    #[test]
    fn anchor_keys_round_trip() {
        for anchor in OverlayAnchor::ALL {
            assert_eq!(OverlayAnchor::from_key(anchor.key()), Some(anchor));
        }
    }

    #[test]
    fn station_lookup() {
        assert_eq!(StationKind::from_key("ORF Sound"), Some(StationKind::Orf));
        assert_eq!(StationKind::from_key("orf"), Some(StationKind::Orf));
        assert_eq!(StationKind::from_key("bbc"), None);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"overlay_enabled": false}"#).unwrap();
        assert!(!config.overlay_enabled);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.overlay_position, "top-left");
        assert_eq!(config.refresh_interval_minutes, 10);
        assert_eq!(config.resolution, Resolution::new(1920, 1080));
    }
}
