//! ORF Sound station profile
//!
//! Reads the ORF audio API broadcast listing (Ö1, FM4, Ö3, ...). The payload
//! is a list of day-blocks, either wrapped as `{"payload": [...]}` or bare,
//! each holding `items` (or `broadcasts`).

use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset};
use regex::Regex;
use serde::Deserialize;

use super::builder::{DayBlock, ItemFields, assemble};
use super::{DiagnosticKind, ParsedSchedule, PayloadError};


static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

#[derive(Deserialize)]
#[serde(untagged)]
enum OrfPayload {
    Wrapped { payload: Vec<OrfDay> },
    Days(Vec<OrfDay>),
}

#[derive(Deserialize)]
struct OrfDay {
    // Items stay untyped so one bad item cannot sink the whole day
    #[serde(default, alias = "broadcasts")]
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrfItem {
    start: Option<RawInstant>,
    #[serde(rename = "startISO")]
    start_iso: Option<String>,
    end: Option<RawInstant>,
    #[serde(rename = "endISO")]
    end_iso: Option<String>,
    /// Milliseconds
    duration: Option<i64>,
    title: Option<String>,
    program_title: Option<String>,
    subtitle: Option<String>,
    #[serde(alias = "presenter", alias = "moderator")]
    author: Option<String>,
}

/// ORF carries both epoch milliseconds (`start`) and ISO text (`startISO`)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Millis(i64),
    Text(String),
}

/// Parser for the ORF audio API schedule
#[derive(Debug, Clone, Copy, Default)]
pub struct OrfProfile;

impl OrfProfile {
    pub fn parse(&self, raw: &str) -> Result<ParsedSchedule, PayloadError> {
        let days = match serde_json::from_str::<OrfPayload>(raw)? {
            OrfPayload::Wrapped { payload } => payload,
            OrfPayload::Days(days) => days,
        };

        let blocks: Vec<DayBlock> = days
            .into_iter()
            .map(|day| day.items.into_iter().map(map_item).collect())
            .collect();

        assemble(blocks)
    }
}

fn map_item(value: serde_json::Value) -> Result<ItemFields, DiagnosticKind> {
    let item: OrfItem =
        serde_json::from_value(value).map_err(|e| DiagnosticKind::Malformed(e.to_string()))?;

    let start = match (item.start_iso.as_deref(), item.start.as_ref()) {
        (Some(iso), _) => parse_iso(iso)?,
        (None, Some(raw)) => parse_instant(raw)?,
        (None, None) => return Err(DiagnosticKind::MissingStart),
    };
    let end = match (item.end_iso.as_deref(), item.end.as_ref()) {
        (Some(iso), _) => Some(parse_iso(iso)?),
        (None, Some(raw)) => Some(parse_instant(raw)?),
        (None, None) => None,
    };

    let title = item.title.as_deref().and_then(clean_text);
    let program_title = item.program_title.as_deref().and_then(clean_text);
    let mut subtitle = item.subtitle.as_deref().and_then(clean_text);

    // programTitle names the show; a differing episode title becomes the
    // description unless a subtitle is present
    let title = match (program_title, title) {
        (Some(program), Some(episode)) => {
            if episode != program && subtitle.is_none() {
                subtitle = Some(episode);
            }
            program
        }
        (Some(program), None) => program,
        (None, Some(episode)) => episode,
        (None, None) => return Err(DiagnosticKind::MissingTitle),
    };

    Ok(ItemFields {
        title,
        subtitle,
        presenter: item.author.as_deref().and_then(clean_text),
        start,
        end,
        duration: item.duration.map(parse_duration).transpose()?,
    })
}

fn parse_instant(raw: &RawInstant) -> Result<DateTime<FixedOffset>, DiagnosticKind> {
    match raw {
        RawInstant::Millis(ms) => DateTime::from_timestamp_millis(*ms)
            .map(|utc| utc.fixed_offset())
            .ok_or_else(|| DiagnosticKind::InvalidTimestamp(ms.to_string())),
        RawInstant::Text(text) => parse_iso(text),
    }
}

fn parse_duration(ms: i64) -> Result<Duration, DiagnosticKind> {
    Duration::try_milliseconds(ms).ok_or(DiagnosticKind::InvalidDuration(ms))
}

fn parse_iso(text: &str) -> Result<DateTime<FixedOffset>, DiagnosticKind> {
    DateTime::parse_from_rfc3339(text.trim())
        .map_err(|_| DiagnosticKind::InvalidTimestamp(text.to_string()))
}

/// Strip HTML tags, decode the common entities and collapse whitespace.
/// Returns `None` when nothing printable is left.
pub fn clean_text(text: &str) -> Option<String> {
    let stripped = HTML_TAG.replace_all(text, "");
    let decoded = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
