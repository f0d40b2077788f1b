//! Display text for a resolved program
//!
//! Turns a [`ResolvedProgram`] into the wrapped, budgeted lines shown by the
//! host UI and laid out by the overlay.

mod wrap;

pub use wrap::{rewrap, wrap, wrap_capped};

use chrono::{DateTime, FixedOffset};

use crate::schedule::ResolvedProgram;

pub const TITLE_BUDGET: usize = 32;
pub const PRESENTER_BUDGET: usize = 30;
pub const DESCRIPTION_BUDGET: usize = 34;
pub const DESCRIPTION_MAX_LINES: usize = 3;

/// Per-field character budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBudgets {
    pub title: usize,
    pub presenter: usize,
    pub description: usize,
    pub description_max_lines: usize,
}

impl Default for TextBudgets {
    fn default() -> Self {
        Self {
            title: TITLE_BUDGET,
            presenter: PRESENTER_BUDGET,
            description: DESCRIPTION_BUDGET,
            description_max_lines: DESCRIPTION_MAX_LINES,
        }
    }
}

/// Which UTC offset times are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The offset each timestamp carries (the station's civil time)
    #[default]
    Schedule,
    Fixed(FixedOffset),
}

impl DisplayZone {
    fn clock_time(&self, instant: DateTime<FixedOffset>) -> String {
        match self {
            Self::Schedule => instant.format("%H:%M").to_string(),
            Self::Fixed(offset) => instant.with_timezone(offset).format("%H:%M").to_string(),
        }
    }
}

/// Formatted strings for one program
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplaySpec {
    pub title_lines: Vec<String>,
    /// `HH:MM - HH:MM`
    pub time_range: String,
    pub presenter_lines: Vec<String>,
    pub description_lines: Vec<String>,
}

impl DisplaySpec {
    /// Longest line across all fields, in characters
    pub fn max_line_chars(&self) -> usize {
        self.title_lines
            .iter()
            .chain(std::iter::once(&self.time_range))
            .chain(&self.presenter_lines)
            .chain(&self.description_lines)
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn title(&self) -> String {
        self.title_lines.join(" ")
    }

    pub fn presenter(&self) -> Option<String> {
        (!self.presenter_lines.is_empty()).then(|| self.presenter_lines.join(" "))
    }

    pub fn description(&self) -> Option<String> {
        (!self.description_lines.is_empty()).then(|| self.description_lines.join(" "))
    }
}

/// Format with the default budgets
pub fn format(resolved: &ResolvedProgram, zone: DisplayZone) -> DisplaySpec {
    format_with(resolved, zone, &TextBudgets::default())
}

pub fn format_with(
    resolved: &ResolvedProgram,
    zone: DisplayZone,
    budgets: &TextBudgets,
) -> DisplaySpec {
    let slot = &resolved.slot;

    DisplaySpec {
        title_lines: wrap(&slot.title, budgets.title),
        time_range: time_range(slot.start, slot.end, zone),
        presenter_lines: slot
            .presenter
            .as_deref()
            .map(|p| wrap(p, budgets.presenter))
            .unwrap_or_default(),
        description_lines: slot
            .subtitle
            .as_deref()
            .map(|d| wrap_capped(d, budgets.description, budgets.description_max_lines))
            .unwrap_or_default(),
    }
}

/// `HH:MM - HH:MM`, 24-hour, zero-padded
pub fn time_range(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    zone: DisplayZone,
) -> String {
    format!("{} - {}", zone.clock_time(start), zone.clock_time(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::BroadcastSlot;

    fn at(ts: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(ts).unwrap()
    }

    fn resolved(slot: BroadcastSlot) -> ResolvedProgram {
        ResolvedProgram {
            resolved_at: slot.start,
            slot,
            contenders: 1,
        }
    }

    fn slot() -> BroadcastSlot {
        BroadcastSlot {
            title: "Morning Show".to_string(),
            subtitle: None,
            presenter: None,
            start: at("2024-05-01T09:05:00+02:00"),
            end: at("2024-05-01T11:00:00+02:00"),
        }
    }

    #[test]
    fn test_time_range_in_schedule_offset() {
        let spec = format(&resolved(slot()), DisplayZone::Schedule);
        assert_eq!(spec.time_range, "09:05 - 11:00");
    }

    #[test]
    fn test_time_range_in_fixed_offset() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let spec = format(&resolved(slot()), DisplayZone::Fixed(utc));
        assert_eq!(spec.time_range, "07:05 - 09:00");
    }

    #[test]
    fn test_time_range_crosses_midnight() {
        let mut late = slot();
        late.start = at("2024-05-01T23:30:00+02:00");
        late.end = at("2024-05-02T00:05:00+02:00");
        assert_eq!(format(&resolved(late), DisplayZone::Schedule).time_range, "23:30 - 00:05");
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let spec = format(&resolved(slot()), DisplayZone::Schedule);
        assert_eq!(spec.title_lines, ["Morning Show"]);
        assert!(spec.presenter_lines.is_empty());
        assert!(spec.description_lines.is_empty());
        assert_eq!(spec.presenter(), None);
    }

    #[test]
    fn test_fields_use_their_budgets() {
        let mut s = slot();
        s.title = "Das Ö1 Konzert aus dem Wiener Musikverein".to_string();
        s.presenter = Some("Gestaltung von Johanna Maria Oberhuber".to_string());
        s.subtitle = Some("word ".repeat(40));
        let spec = format(&resolved(s), DisplayZone::Schedule);

        assert!(spec.title_lines.iter().all(|l| l.chars().count() <= TITLE_BUDGET));
        assert_eq!(spec.title_lines, ["Das Ö1 Konzert aus dem Wiener", "Musikverein"]);
        assert!(spec.presenter_lines.iter().all(|l| l.chars().count() <= PRESENTER_BUDGET));
        assert_eq!(spec.description_lines.len(), DESCRIPTION_MAX_LINES);
        assert!(spec.description_lines[2].ends_with("..."));
    }

    #[test]
    fn test_max_line_chars_includes_time_range() {
        let spec = DisplaySpec {
            title_lines: vec!["News".into()],
            time_range: "11:00 - 13:00".into(),
            ..Default::default()
        };
        assert_eq!(spec.max_line_chars(), 13);
    }
}
