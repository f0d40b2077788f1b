//! ON AIR Overlay Library
//!
//! Turns the currently airing program into positioned draw items and hands
//! them to an external drawing service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    pipeline                         │
//! │         refresh(), RefreshOutput, SnapshotKeeper    │
//! │       (parse → resolve → format → layout cycle)     │
//! ├─────────────────────────────────────────────────────┤
//! │                    layout                           │
//! │        anchor math, stacking, on-screen fitting     │
//! ├─────────────────────────────────────────────────────┤
//! │                 plan / colors                       │
//! │        DrawPlan, DrawItem, BackgroundRect           │
//! │           (renderer-neutral primitives)             │
//! ├─────────────────────────────────────────────────────┤
//! │                    sink                             │
//! │          OverlaySink trait, PlanPresenter           │
//! │        (in-game overlay, preview, stdout)           │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod colors;
pub mod layout;
pub mod pipeline;
pub mod plan;
pub mod sink;

// Re-export commonly used types
pub use layout::layout;
pub use pipeline::{ProgramStatus, RefreshOutput, SnapshotKeeper, refresh};
pub use plan::{BackgroundRect, DrawItem, DrawPlan, TextRole, TextSize};
pub use sink::{OverlaySink, PlanPresenter};
