//! Selects the broadcast airing at a given instant

use chrono::{DateTime, FixedOffset};

use super::BroadcastSlot;

/// The slot airing at `resolved_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProgram {
    pub slot: BroadcastSlot,
    pub resolved_at: DateTime<FixedOffset>,
    /// Slots that contained `resolved_at`; above 1 only for overlapping data
    pub contenders: usize,
}

/// Outcome of [`resolve`]. `NotFound` is a normal result (gap in the
/// schedule, or `now` outside it), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramLookup {
    Found(ResolvedProgram),
    NotFound,
}

impl ProgramLookup {
    pub fn program(&self) -> Option<&ResolvedProgram> {
        match self {
            Self::Found(program) => Some(program),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Find the slot with `start <= now < end`.
///
/// `slots` must be sorted by start. If overlapping upstream data puts `now`
/// inside several slots, the earliest-starting one wins.
pub fn resolve(slots: &[BroadcastSlot], now: DateTime<FixedOffset>) -> ProgramLookup {
    // Nothing starting after `now` can contain it
    let candidates = &slots[..slots.partition_point(|slot| slot.start <= now)];

    let mut containing = candidates.iter().filter(|slot| slot.contains(now));
    let Some(winner) = containing.next() else {
        return ProgramLookup::NotFound;
    };
    let contenders = 1 + containing.count();

    if contenders > 1 {
        tracing::warn!(
            contenders,
            title = %winner.title,
            at = %now,
            "overlapping broadcasts, using the earliest start"
        );
    }

    ProgramLookup::Found(ResolvedProgram {
        slot: winner.clone(),
        resolved_at: now,
        contenders,
    })
}
