//! Plain strings for the host application's labels
//!
//! The host UI does no layout; it shows these strings as they are.

use chrono::{DateTime, FixedOffset};

use crate::format::DisplaySpec;

/// Label texts for one refresh result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostView {
    pub title: String,
    pub time_range: String,
    pub presenter: String,
    pub description: String,
    pub status: String,
}

impl HostView {
    /// Shown before the first refresh completes
    pub fn waiting() -> Self {
        Self {
            title: "No program data".to_string(),
            time_range: String::new(),
            presenter: String::new(),
            description: "Waiting for data...".to_string(),
            status: "Status: No data".to_string(),
        }
    }

    pub fn on_air(spec: &DisplaySpec, updated_at: DateTime<FixedOffset>) -> Self {
        Self {
            title: spec.title(),
            time_range: spec.time_range.clone(),
            presenter: spec
                .presenter()
                .map(|p| format!("Presenter: {p}"))
                .unwrap_or_default(),
            description: spec.description().unwrap_or_default(),
            status: last_updated(updated_at),
        }
    }

    pub fn off_air(updated_at: DateTime<FixedOffset>) -> Self {
        Self {
            title: "No program currently airing".to_string(),
            time_range: String::new(),
            presenter: String::new(),
            description: String::new(),
            status: last_updated(updated_at),
        }
    }

    /// One-line failure; callers keep the previous view's program fields
    /// and only swap the status.
    pub fn with_error(mut self, error: &dyn std::error::Error) -> Self {
        self.status = format!("Status: Error ({error})");
        self
    }

    /// The label lines in display order, skipping empty ones
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [
            &self.title,
            &self.time_range,
            &self.presenter,
            &self.description,
            &self.status,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
    }
}

fn last_updated(at: DateTime<FixedOffset>) -> String {
    format!("Last updated: {}", at.format("%H:%M:%S"))
}
