//! Time source for refresh cycles
//!
//! The core never reads the system clock on its own; the host passes a
//! [`Clock`] (or the instant it produced) into each refresh.

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the current timezone-aware instant
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host wall clock, carrying the host's local UTC offset
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock pinned to one instant (replays and tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parse an RFC 3339 timestamp, e.g. `2024-05-01T10:00:00+02:00`
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_keeps_offset() {
        let clock = FixedClock::parse("2024-05-01T10:00:00+02:00").unwrap();
        assert_eq!(clock.now().offset().local_minus_utc(), 2 * 3600);
        assert_eq!(clock.now().to_rfc3339(), "2024-05-01T10:00:00+02:00");
    }

    #[test]
    fn fixed_clock_rejects_garbage() {
        assert!(FixedClock::parse("ten o'clock").is_err());
    }
}
