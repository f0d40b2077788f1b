//! Station-independent schedule assembly
//!
//! A station profile maps its payload into day-blocks of [`ItemFields`]
//! (or a diagnostic per unusable item). This module derives missing end
//! times, validates durations and produces the canonical ordering.

use chrono::{DateTime, Duration, FixedOffset};

use super::{BroadcastSlot, DiagnosticKind, ParseDiagnostic, ParsedSchedule, PayloadError};

/// Length assumed for the very last broadcast when nothing bounds it
pub const DEFAULT_SLOT_DURATION: Duration = Duration::minutes(60);

/// Station-neutral fields of one schedule item
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub title: String,
    pub subtitle: Option<String>,
    pub presenter: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
    pub duration: Option<Duration>,
}

/// One day-block as mapped by a station profile
pub type DayBlock = Vec<Result<ItemFields, DiagnosticKind>>;

struct Candidate {
    day: usize,
    item: usize,
    fields: ItemFields,
}

/// Build a [`ParsedSchedule`] from mapped day-blocks.
///
/// Fails only when no valid slot remains.
pub fn assemble(days: Vec<DayBlock>) -> Result<ParsedSchedule, PayloadError> {
    let mut diagnostics = Vec::new();
    let mut candidates = Vec::new();

    for (day, block) in days.into_iter().enumerate() {
        for (item, entry) in block.into_iter().enumerate() {
            match entry {
                Ok(fields) => candidates.push(Candidate { day, item, fields }),
                Err(kind) => diagnostics.push(ParseDiagnostic { day, item, kind }),
            }
        }
    }

    // Stable: equal starts keep payload order
    candidates.sort_by_key(|c| c.fields.start);

    let mut slots = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let fields = &candidate.fields;
        let end = match (fields.end, fields.duration) {
            (Some(end), _) => Some(end),
            (None, Some(duration)) => fields.start.checked_add_signed(duration),
            (None, None) => derive_end(&candidates[index + 1..], candidate.day, fields.start),
        };

        let end = match end {
            Some(end) if end > fields.start => end,
            invalid => {
                let kind = match invalid {
                    Some(_) => DiagnosticKind::EmptyDuration,
                    None => DiagnosticKind::EndOutOfRange,
                };
                diagnostics.push(ParseDiagnostic {
                    day: candidate.day,
                    item: candidate.item,
                    kind,
                });
                continue;
            }
        };

        slots.push(BroadcastSlot {
            title: fields.title.clone(),
            subtitle: fields.subtitle.clone(),
            presenter: fields.presenter.clone(),
            start: fields.start,
            end,
        });
    }

    for diagnostic in &diagnostics {
        tracing::warn!(%diagnostic, "skipped schedule item");
    }

    if slots.is_empty() {
        return Err(PayloadError::NoValidSlots {
            skipped: diagnostics.len(),
        });
    }

    tracing::debug!(
        slots = slots.len(),
        skipped = diagnostics.len(),
        "schedule assembled"
    );

    Ok(ParsedSchedule { slots, diagnostics })
}

/// End of an item without explicit end or duration: the next later start in
/// the same day-block, else the next later start in any later block, else
/// the default duration. `None` when that would overflow the calendar.
fn derive_end(
    following: &[Candidate],
    day: usize,
    start: DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    following
        .iter()
        .find(|c| c.day == day && c.fields.start > start)
        .or_else(|| following.iter().find(|c| c.fields.start > start))
        .map(|c| c.fields.start)
        .or_else(|| start.checked_add_signed(DEFAULT_SLOT_DURATION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ts: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(ts).unwrap()
    }

    fn item(title: &str, start: &str, end: Option<&str>) -> Result<ItemFields, DiagnosticKind> {
        Ok(ItemFields {
            title: title.to_string(),
            subtitle: None,
            presenter: None,
            start: at(start),
            end: end.map(at),
            duration: None,
        })
    }

    #[test]
    fn end_falls_back_to_next_start_in_block() {
        let days = vec![vec![
            item("A", "2024-05-01T09:00:00+02:00", None),
            item("B", "2024-05-01T11:00:00+02:00", Some("2024-05-01T12:00:00+02:00")),
        ]];
        let schedule = assemble(days).unwrap();
        assert_eq!(schedule.slots[0].end, at("2024-05-01T11:00:00+02:00"));
        assert_eq!(schedule.slots[1].end, at("2024-05-01T12:00:00+02:00"));
    }

    #[test]
    fn last_item_gets_default_duration() {
        let days = vec![vec![item("Late", "2024-05-01T23:00:00+02:00", None)]];
        let schedule = assemble(days).unwrap();
        assert_eq!(schedule.slots[0].end, at("2024-05-02T00:00:00+02:00"));
    }

    #[test]
    fn last_item_of_day_runs_until_next_day_block() {
        let days = vec![
            vec![item("Night", "2024-05-01T23:05:00+02:00", None)],
            vec![item("Morning", "2024-05-02T06:00:00+02:00", None)],
        ];
        let schedule = assemble(days).unwrap();
        assert_eq!(schedule.slots[0].end, at("2024-05-02T06:00:00+02:00"));
        assert_eq!(schedule.slots[1].end, at("2024-05-02T07:00:00+02:00"));
    }

    #[test]
    fn sorts_by_start_and_keeps_payload_order_for_ties() {
        let days = vec![vec![
            item("Second", "2024-05-01T10:00:00+02:00", Some("2024-05-01T11:00:00+02:00")),
            item("First", "2024-05-01T08:00:00+02:00", Some("2024-05-01T09:00:00+02:00")),
            item("Tie", "2024-05-01T10:00:00+02:00", Some("2024-05-01T10:30:00+02:00")),
        ]];
        let titles: Vec<_> = assemble(days)
            .unwrap()
            .slots
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["First", "Second", "Tie"]);
    }

    #[test]
    fn duration_used_when_end_missing() {
        let mut fields = item("Short", "2024-05-01T10:00:00+02:00", None).unwrap();
        fields.duration = Some(Duration::minutes(5));
        let schedule = assemble(vec![vec![Ok(fields)]]).unwrap();
        assert_eq!(schedule.slots[0].end, at("2024-05-01T10:05:00+02:00"));
    }

    #[test]
    fn inverted_item_is_a_diagnostic() {
        let days = vec![vec![
            item("Backwards", "2024-05-01T10:00:00+02:00", Some("2024-05-01T09:00:00+02:00")),
            item("Fine", "2024-05-01T11:00:00+02:00", None),
        ]];
        let schedule = assemble(days).unwrap();
        assert_eq!(schedule.slots.len(), 1);
        assert_eq!(schedule.diagnostics[0].kind, DiagnosticKind::EmptyDuration);
    }

    #[test]
    fn nothing_valid_is_an_error() {
        let days = vec![vec![Err(DiagnosticKind::MissingStart), Err(DiagnosticKind::MissingTitle)]];
        assert!(matches!(
            assemble(days),
            Err(PayloadError::NoValidSlots { skipped: 2 })
        ));
    }
}
