//! Broadcast schedules
//!
//! Station payload → [`ParsedSchedule`] → [`ProgramLookup`] for one instant.

mod builder;
mod error;
mod orf;
mod resolver;
mod slot;
mod source;

pub use builder::{DEFAULT_SLOT_DURATION, DayBlock, ItemFields, assemble};
pub use error::PayloadError;
pub use orf::{OrfProfile, clean_text};
pub use resolver::{ProgramLookup, ResolvedProgram, resolve};
pub use slot::{BroadcastSlot, DiagnosticKind, ParseDiagnostic, ParsedSchedule};
pub use source::ScheduleSource;
