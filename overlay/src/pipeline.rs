//! One refresh cycle: parse → resolve → format → layout
//!
//! [`refresh`] is synchronous and holds no state; every call produces a
//! complete, self-consistent result. [`SnapshotKeeper`] is the host-side
//! holder that keeps the last good result on screen when a cycle fails.

use chrono::{DateTime, FixedOffset};
use onair_core::{
    DisplaySpec, DisplayZone, HostView, OverlayConfig, ParseDiagnostic, PayloadError,
    ProgramLookup, ScheduleSource, StationConfig, format, resolve,
};

use crate::layout::layout;
use crate::plan::DrawPlan;

/// What the schedule says about `now`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramStatus {
    OnAir(DisplaySpec),
    /// Valid schedule, nothing airing at this instant
    OffAir,
}

/// Result of one refresh cycle
#[derive(Debug)]
pub struct RefreshOutput {
    pub refreshed_at: DateTime<FixedOffset>,
    pub status: Result<ProgramStatus, PayloadError>,
    /// Items skipped while parsing (empty when the payload was rejected)
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Empty unless a program is on air and the overlay is enabled
    pub plan: DrawPlan,
}

/// Run one full cycle for `now` over a raw station payload.
pub fn refresh(
    now: DateTime<FixedOffset>,
    payload: &str,
    station: &StationConfig,
    overlay: &OverlayConfig,
    zone: DisplayZone,
) -> RefreshOutput {
    let source = ScheduleSource::for_station(station.kind);

    let schedule = match source.parse(payload) {
        Ok(schedule) => schedule,
        Err(error) => {
            tracing::warn!(%error, station = %source.kind(), "refresh failed");
            return RefreshOutput {
                refreshed_at: now,
                status: Err(error),
                diagnostics: Vec::new(),
                plan: DrawPlan::empty(),
            };
        }
    };

    let status = match resolve(&schedule.slots, now) {
        ProgramLookup::Found(program) => ProgramStatus::OnAir(format(&program, zone)),
        ProgramLookup::NotFound => ProgramStatus::OffAir,
    };
    let plan = plan_for(&status, overlay);

    tracing::debug!(
        slots = schedule.slots.len(),
        skipped = schedule.diagnostics.len(),
        on_air = matches!(status, ProgramStatus::OnAir(_)),
        items = plan.items.len(),
        "refresh complete"
    );

    RefreshOutput {
        refreshed_at: now,
        status: Ok(status),
        diagnostics: schedule.diagnostics,
        plan,
    }
}

/// Draw plan for a status under the given overlay settings
pub fn plan_for(status: &ProgramStatus, overlay: &OverlayConfig) -> DrawPlan {
    match status {
        ProgramStatus::OnAir(display) => layout(display, overlay),
        ProgramStatus::OffAir => DrawPlan::empty(),
    }
}

/// Keeps the last successful refresh for display.
///
/// A failed cycle only updates the status line; the previous program text
/// and draw plan stay as they were. Results are numbered by request; one
/// older than the last result taken is ignored.
#[derive(Debug, Clone)]
pub struct SnapshotKeeper {
    status: Option<ProgramStatus>,
    plan: DrawPlan,
    view: HostView,
    last_error: Option<String>,
    last_sequence: Option<u64>,
}

impl SnapshotKeeper {
    pub fn new() -> Self {
        Self {
            status: None,
            plan: DrawPlan::empty(),
            view: HostView::waiting(),
            last_error: None,
            last_sequence: None,
        }
    }

    /// Adopt `output` of request `sequence` if it succeeded and is not
    /// stale. Returns whether the program and plan were replaced.
    pub fn apply(&mut self, sequence: u64, output: RefreshOutput) -> bool {
        if !self.take_sequence(sequence) {
            return false;
        }
        match output.status {
            Ok(status) => {
                self.view = match &status {
                    ProgramStatus::OnAir(display) => HostView::on_air(display, output.refreshed_at),
                    ProgramStatus::OffAir => HostView::off_air(output.refreshed_at),
                };
                self.status = Some(status);
                self.plan = output.plan;
                self.last_error = None;
                true
            }
            Err(error) => {
                self.note_error(&error);
                false
            }
        }
    }

    /// Note a failed cycle of request `sequence`, including failures before
    /// parsing such as an unreachable endpoint. Program fields and plan are
    /// left untouched. Returns `false` when the request is stale.
    pub fn record_failure(&mut self, sequence: u64, error: &dyn std::error::Error) -> bool {
        if !self.take_sequence(sequence) {
            return false;
        }
        self.note_error(error);
        true
    }

    fn take_sequence(&mut self, sequence: u64) -> bool {
        if self.last_sequence.is_some_and(|last| sequence <= last) {
            tracing::debug!(sequence, last = ?self.last_sequence, "dropping stale refresh result");
            return false;
        }
        self.last_sequence = Some(sequence);
        true
    }

    fn note_error(&mut self, error: &dyn std::error::Error) {
        self.view = self.view.clone().with_error(error);
        self.last_error = Some(error.to_string());
    }

    /// Lay the retained program out again for request `sequence`, e.g.
    /// after the anchor or the enabled flag changed. Refresh results from
    /// earlier requests are ignored afterwards.
    pub fn relayout(&mut self, sequence: u64, overlay: &OverlayConfig) -> &DrawPlan {
        self.last_sequence = Some(self.last_sequence.map_or(sequence, |last| last.max(sequence)));
        self.plan = self
            .status
            .as_ref()
            .map(|status| plan_for(status, overlay))
            .unwrap_or_default();
        &self.plan
    }

    pub fn status(&self) -> Option<&ProgramStatus> {
        self.status.as_ref()
    }

    pub fn plan(&self) -> &DrawPlan {
        &self.plan
    }

    pub fn view(&self) -> &HostView {
        &self.view
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SnapshotKeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::TextRole;
    use onair_core::{OverlayAnchor, Resolution};

    const SCHEDULE: &str = r#"{"payload": [{"items": [
        {"start": "2024-05-01T09:00:00+02:00", "end": "2024-05-01T11:00:00+02:00",
         "title": "Morning Show", "author": "Anna Berger",
         "subtitle": "Music, news and conversation for the first hours of the day, with guests from culture and science"},
        {"start": "2024-05-01T11:00:00+02:00", "end": "2024-05-01T13:00:00+02:00", "title": "News"},
        {"title": "Broken"}
    ]}]}"#;

    fn at(ts: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(ts).unwrap()
    }

    fn overlay() -> OverlayConfig {
        OverlayConfig::new(Resolution::new(1920, 1080), OverlayAnchor::TopLeft, true).unwrap()
    }

    fn run(now: &str, payload: &str) -> RefreshOutput {
        refresh(
            at(now),
            payload,
            &StationConfig::default(),
            &overlay(),
            DisplayZone::Schedule,
        )
    }

    #[test]
    fn test_on_air_cycle() {
        let output = run("2024-05-01T10:00:00+02:00", SCHEDULE);
        let Ok(ProgramStatus::OnAir(display)) = &output.status else {
            panic!("expected a program on air: {:?}", output.status);
        };
        assert_eq!(display.title_lines, ["Morning Show"]);
        assert_eq!(display.time_range, "09:00 - 11:00");
        assert_eq!(display.description_lines.len(), 3);
        assert_eq!(output.diagnostics.len(), 1);

        let title = output.plan.items_with_role(TextRole::Title).next().unwrap();
        assert_eq!(title.text, "Morning Show");
        assert!(output.plan.background.is_some());
    }

    #[test]
    fn test_off_air_cycle_has_empty_plan() {
        let output = run("2024-05-01T13:30:00+02:00", SCHEDULE);
        assert!(matches!(output.status, Ok(ProgramStatus::OffAir)));
        assert!(output.plan.is_empty());
    }

    #[test]
    fn test_disabled_overlay_still_formats() {
        let output = refresh(
            at("2024-05-01T10:00:00+02:00"),
            SCHEDULE,
            &StationConfig::default(),
            &overlay().with_enabled(false),
            DisplayZone::Schedule,
        );
        assert!(matches!(output.status, Ok(ProgramStatus::OnAir(_))));
        assert!(output.plan.is_empty());
    }

    #[test]
    fn test_bad_payload_is_an_error() {
        let output = run("2024-05-01T10:00:00+02:00", "Service Unavailable");
        assert!(matches!(output.status, Err(PayloadError::Json(_))));
        assert!(output.plan.is_empty());
    }

    #[test]
    fn test_keeper_retains_last_good_snapshot() {
        let mut keeper = SnapshotKeeper::new();
        assert_eq!(keeper.view().title, "No program data");

        assert!(keeper.apply(1, run("2024-05-01T10:00:00+02:00", SCHEDULE)));
        let good_plan = keeper.plan().clone();
        assert_eq!(keeper.view().title, "Morning Show");
        assert_eq!(keeper.view().status, "Last updated: 10:00:00");

        assert!(!keeper.apply(2, run("2024-05-01T10:10:00+02:00", "{}")));
        assert_eq!(keeper.plan(), &good_plan);
        assert_eq!(keeper.view().title, "Morning Show");
        assert!(keeper.view().status.starts_with("Status: Error"));
        assert!(keeper.last_error().is_some());

        assert!(keeper.apply(3, run("2024-05-01T13:30:00+02:00", SCHEDULE)));
        assert_eq!(keeper.view().title, "No program currently airing");
        assert!(keeper.plan().is_empty());
        assert!(keeper.last_error().is_none());
    }

    #[test]
    fn test_keeper_records_fetch_failure() {
        let mut keeper = SnapshotKeeper::new();
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert!(keeper.record_failure(1, &error));
        assert_eq!(keeper.view().title, "No program data");
        assert_eq!(keeper.view().status, "Status: Error (no such file)");
        assert_eq!(keeper.last_error(), Some("no such file"));
        assert!(keeper.status().is_none());
    }

    #[test]
    fn test_keeper_ignores_older_results() {
        let mut keeper = SnapshotKeeper::new();
        let older = run("2024-05-01T10:00:00+02:00", SCHEDULE);
        let newer = run("2024-05-01T13:30:00+02:00", SCHEDULE);

        assert!(keeper.apply(2, newer));
        assert!(!keeper.apply(1, older));
        assert_eq!(keeper.view().title, "No program currently airing");
        assert!(keeper.plan().is_empty());

        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert!(!keeper.record_failure(2, &error));
        assert!(keeper.last_error().is_none());
        assert_eq!(keeper.view().status, "Last updated: 13:30:00");
    }

    #[test]
    fn test_keeper_relayout_follows_anchor() {
        let mut keeper = SnapshotKeeper::new();
        keeper.apply(1, run("2024-05-01T10:00:00+02:00", SCHEDULE));
        let before = keeper.plan().background.unwrap();

        let moved = overlay().with_anchor(OverlayAnchor::BottomRight);
        let after = keeper.relayout(3, &moved).background.unwrap();
        assert!(after.x > before.x);
        assert!(after.y > before.y);

        assert!(keeper.relayout(4, &moved.with_enabled(false)).is_empty());

        // A refresh requested before the relayout no longer applies
        assert!(!keeper.apply(2, run("2024-05-01T13:30:00+02:00", SCHEDULE)));
        assert_eq!(keeper.view().title, "Morning Show");
    }
}
