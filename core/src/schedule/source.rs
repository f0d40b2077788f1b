use onair_types::StationKind;

use super::{OrfProfile, ParsedSchedule, PayloadError};

/// Station-specific schedule parser, selected by [`StationKind`]
#[derive(Debug, Clone, Copy)]
pub enum ScheduleSource {
    Orf(OrfProfile),
}

impl ScheduleSource {
    pub fn for_station(kind: StationKind) -> Self {
        match kind {
            StationKind::Orf => Self::Orf(OrfProfile),
        }
    }

    pub fn kind(&self) -> StationKind {
        match self {
            Self::Orf(_) => StationKind::Orf,
        }
    }

    /// Parse a raw payload into the canonical, chronologically ordered slots.
    pub fn parse(&self, raw: &str) -> Result<ParsedSchedule, PayloadError> {
        match self {
            Self::Orf(profile) => profile.parse(raw),
        }
    }
}

impl From<StationKind> for ScheduleSource {
    fn from(kind: StationKind) -> Self {
        Self::for_station(kind)
    }
}
