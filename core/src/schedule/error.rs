//! Error types for schedule payload parsing

use thiserror::Error;

/// A payload that cannot produce a schedule for this refresh cycle.
///
/// Individual malformed items are diagnostics, not errors; see
/// [`ParseDiagnostic`](super::ParseDiagnostic).
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid schedule JSON")]
    Json(#[from] serde_json::Error),

    #[error("payload contains no valid broadcasts ({skipped} items skipped)")]
    NoValidSlots { skipped: usize },
}
