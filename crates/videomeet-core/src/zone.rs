//! Display time zones.
//!
//! Rendering a time range needs a calendar day and a wall clock, both of
//! which depend on a time zone. [`DisplayZone`] names that zone explicitly so
//! output does not silently change with the machine it runs on.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use crate::error::MeetingError;
use crate::format::format_meeting_time_range;

/// The zone used to render dates and times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayZone {
    /// The execution environment's local zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// An IANA zone, e.g. `Europe/Paris`.
    Named(Tz),
}

impl DisplayZone {
    /// Formats a meeting time range in this zone.
    pub fn format_time_range(&self, start_time: DateTime<Utc>, duration_minutes: u32) -> String {
        match self {
            Self::Local => format_meeting_time_range(start_time, duration_minutes, &Local),
            Self::Utc => format_meeting_time_range(start_time, duration_minutes, &Utc),
            Self::Named(tz) => format_meeting_time_range(start_time, duration_minutes, tz),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = MeetingError;

    /// Parses `local`, `utc` (case-insensitive) or an IANA zone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if name.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        name.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| MeetingError::UnknownTimeZone(name.to_string()))
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}
