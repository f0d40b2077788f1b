//! ON AIR core
//!
//! Turns a station's broadcast schedule into the program airing right now
//! and the text shown for it.
//!
//! ```text
//! payload ──ScheduleSource::parse──▶ ParsedSchedule
//!         ──resolve(now)──────────▶ ProgramLookup
//!         ──format(zone)──────────▶ DisplaySpec ──▶ HostView / overlay layout
//! ```

pub mod clock;
pub mod context;
pub mod format;
pub mod host;
pub mod schedule;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{
    AppConfig, AppConfigExt, ConfigError, ConfigStore, OverlayAnchor, OverlayConfig, Resolution,
    StationConfig, StationKind,
};
pub use format::{DisplaySpec, DisplayZone, TextBudgets, format};
pub use host::HostView;
pub use schedule::{
    BroadcastSlot, ParseDiagnostic, ParsedSchedule, PayloadError, ProgramLookup, ResolvedProgram,
    ScheduleSource, resolve,
};
