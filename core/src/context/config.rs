//! Application configuration
//!
//! This module re-exports the shared settings types from onair-types, turns
//! them into validated snapshots for each refresh, and persists them.

use std::time::Duration;

pub use onair_types::{
    AppConfig, Color, DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL_MINUTES,
    MAX_REFRESH_INTERVAL_MINUTES, MIN_REFRESH_INTERVAL_MINUTES, OverlayAnchor, Resolution,
    StationKind, overlay_colors,
};

use super::ConfigError;

const APP_NAME: &str = "onair";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// Validated Snapshots
// ─────────────────────────────────────────────────────────────────────────────

/// Overlay settings as read by the layout engine. Always has a positive
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    resolution: Resolution,
    anchor: OverlayAnchor,
    enabled: bool,
}

impl OverlayConfig {
    pub fn new(
        resolution: Resolution,
        anchor: OverlayAnchor,
        enabled: bool,
    ) -> Result<Self, ConfigError> {
        if !resolution.is_valid() {
            return Err(ConfigError::InvalidResolution {
                width: resolution.width,
                height: resolution.height,
            });
        }
        Ok(Self {
            resolution,
            anchor,
            enabled,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn anchor(&self) -> OverlayAnchor {
        self.anchor
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn with_anchor(self, anchor: OverlayAnchor) -> Self {
        Self { anchor, ..self }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            anchor: OverlayAnchor::default(),
            enabled: true,
        }
    }
}

/// Where the schedule comes from and how often the host refreshes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    pub api_url: String,
    pub kind: StationKind,
    pub refresh_interval_minutes: u32,
}

impl StationConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval_minutes) * 60)
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            kind: StationKind::default(),
            refresh_interval_minutes: DEFAULT_REFRESH_INTERVAL_MINUTES,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence and validation
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    /// Replace out-of-range or unknown stored values with defaults
    fn sanitized(self) -> Self;
    fn overlay_config(&self) -> Result<OverlayConfig, ConfigError>;
    fn station_config(&self) -> Result<StationConfig, ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        match confy::load::<AppConfig>(APP_NAME, CONFIG_NAME).map_err(ConfigError::from) {
            Ok(config) => config.sanitized(),
            Err(error) => {
                tracing::warn!(%error, "could not read configuration, using defaults");
                Self::default()
            }
        }
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn sanitized(mut self) -> Self {
        if !(MIN_REFRESH_INTERVAL_MINUTES..=MAX_REFRESH_INTERVAL_MINUTES)
            .contains(&self.refresh_interval_minutes)
        {
            tracing::warn!(
                minutes = self.refresh_interval_minutes,
                "refresh interval out of range, using default"
            );
            self.refresh_interval_minutes = DEFAULT_REFRESH_INTERVAL_MINUTES;
        }
        if OverlayAnchor::from_key(&self.overlay_position).is_none() {
            tracing::warn!(position = %self.overlay_position, "unknown overlay position, using default");
            self.overlay_position = OverlayAnchor::default().key().to_string();
        }
        if StationKind::from_key(&self.station_kind).is_none() {
            tracing::warn!(station = %self.station_kind, "unknown station type, using default");
            self.station_kind = StationKind::default().key().to_string();
        }
        if self.api_url.trim().is_empty() {
            self.api_url = DEFAULT_API_URL.to_string();
        }
        if !self.resolution.is_valid() {
            tracing::warn!(resolution = %self.resolution, "invalid resolution, using default");
            self.resolution = Resolution::default();
        }
        self
    }

    fn overlay_config(&self) -> Result<OverlayConfig, ConfigError> {
        let anchor = OverlayAnchor::from_key(&self.overlay_position)
            .ok_or_else(|| ConfigError::UnknownAnchor(self.overlay_position.clone()))?;
        OverlayConfig::new(self.resolution, anchor, self.overlay_enabled)
    }

    fn station_config(&self) -> Result<StationConfig, ConfigError> {
        let kind = StationKind::from_key(&self.station_kind)
            .ok_or_else(|| ConfigError::UnknownStation(self.station_kind.clone()))?;
        let minutes = self.refresh_interval_minutes;
        if !(MIN_REFRESH_INTERVAL_MINUTES..=MAX_REFRESH_INTERVAL_MINUTES).contains(&minutes) {
            return Err(ConfigError::RefreshIntervalOutOfRange {
                minutes,
                min: MIN_REFRESH_INTERVAL_MINUTES,
                max: MAX_REFRESH_INTERVAL_MINUTES,
            });
        }
        let api_url = self.api_url.trim();
        if api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        Ok(StationConfig {
            api_url: api_url.to_string(),
            kind,
            refresh_interval_minutes: minutes,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Store
// ─────────────────────────────────────────────────────────────────────────────

/// Single owner of the settings. Hands out immutable snapshots and keeps the
/// last-known-good values when an update is rejected.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    raw: AppConfig,
    overlay: OverlayConfig,
    station: StationConfig,
}

impl ConfigStore {
    /// Build from stored settings; invalid fields fall back to defaults.
    pub fn new(raw: AppConfig) -> Self {
        let raw = raw.sanitized();
        // Sanitized settings always validate
        let overlay = raw
            .overlay_config()
            .unwrap_or_else(|_| OverlayConfig::default().with_enabled(raw.overlay_enabled));
        let station = raw.station_config().unwrap_or_default();
        Self {
            raw,
            overlay,
            station,
        }
    }

    pub fn raw(&self) -> &AppConfig {
        &self.raw
    }

    pub fn overlay(&self) -> OverlayConfig {
        self.overlay
    }

    pub fn station(&self) -> &StationConfig {
        &self.station
    }

    /// Validate and adopt `candidate`. On error nothing changes.
    pub fn update(&mut self, candidate: AppConfig) -> Result<(), ConfigError> {
        let validated = candidate
            .overlay_config()
            .and_then(|overlay| Ok((overlay, candidate.station_config()?)));

        match validated {
            Ok((overlay, station)) => {
                self.overlay = overlay;
                self.station = station;
                self.raw = candidate;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "configuration update rejected, keeping previous");
                Err(error)
            }
        }
    }

    /// Apply a change to a copy of the current settings and validate it
    pub fn modify(&mut self, change: impl FnOnce(&mut AppConfig)) -> Result<(), ConfigError> {
        let mut candidate = self.raw.clone();
        change(&mut candidate);
        self.update(candidate)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
