use chrono::{DateTime, FixedOffset};

/// One scheduled broadcast
///
/// `end > start` always holds; `title` is non-empty and whitespace-normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastSlot {
    pub title: String,
    /// Description / subtitle line
    pub subtitle: Option<String>,
    pub presenter: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl BroadcastSlot {
    /// True when `now` falls in the half-open interval `[start, end)`
    #[inline]
    pub fn contains(&self, now: DateTime<FixedOffset>) -> bool {
        self.start <= now && now < self.end
    }
}

/// Output of one parse call: the valid slots in chronological order plus
/// every item that was skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct ParsedSchedule {
    pub slots: Vec<BroadcastSlot>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParsedSchedule {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Why an item was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingStart,
    MissingTitle,
    InvalidTimestamp(String),
    /// Duration in milliseconds that no time span can hold
    InvalidDuration(i64),
    /// Item ends at or before its start
    EmptyDuration,
    /// Derived end lies beyond the representable calendar
    EndOutOfRange,
    /// Item has the wrong JSON shape for the station profile
    Malformed(String),
}

/// A skipped schedule item, located by day-block and item index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub day: usize,
    pub item: usize,
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match &self.kind {
            DiagnosticKind::MissingStart => "missing start timestamp".to_string(),
            DiagnosticKind::MissingTitle => "missing title".to_string(),
            DiagnosticKind::InvalidTimestamp(raw) => format!("invalid timestamp '{raw}'"),
            DiagnosticKind::InvalidDuration(ms) => format!("invalid duration {ms} ms"),
            DiagnosticKind::EmptyDuration => "ends at or before its start".to_string(),
            DiagnosticKind::EndOutOfRange => "end time out of range".to_string(),
            DiagnosticKind::Malformed(detail) => format!("malformed item ({detail})"),
        };
        write!(f, "day {} item {}: {}", self.day, self.item, reason)
    }
}
