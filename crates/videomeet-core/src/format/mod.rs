//! Display strings for meetings.
//!
//! This module renders:
//! - **Durations**: `"45 minutes"`, `"1 hour"`, `"2 hours 30 minutes"`
//! - **Time ranges**: `"Tue, Mar 25, 10:00 AM - 11:00 AM"`, repeating the
//!   date when the meeting crosses midnight in the display zone
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use videomeet_core::format::{format_meeting_duration, format_meeting_time_range};
//!
//! assert_eq!(format_meeting_duration(90), "1 hour 30 minutes");
//!
//! let start = Utc.with_ymd_and_hms(2025, 3, 25, 10, 0, 0).unwrap();
//! assert_eq!(
//!     format_meeting_time_range(start, 60, &Utc),
//!     "Tue, Mar 25, 10:00 AM - 11:00 AM"
//! );
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Offset, TimeZone, Utc};

use crate::meeting::meeting_end_time;


/// Short weekday, short month, day of month without padding.
const DAY_FORMAT: &str = "%a, %b %-d";

/// 12-hour clock without a leading zero on the hour.
const CLOCK_FORMAT: &str = "%-I:%M %p";

/// Formats `count unit`, appending `s` unless the count is exactly 1.
fn pluralize(count: u32, unit: &str) -> String {
    format!("{} {}{}", count, unit, if count != 1 { "s" } else { "" })
}

/// Formats a meeting duration in minutes as English text.
///
/// Under an hour only minutes are shown; whole hours drop the minute clause.
pub fn format_meeting_duration(duration_minutes: u32) -> String {
    if duration_minutes < 60 {
        return pluralize(duration_minutes, "minute");
    }

    let hours = duration_minutes / 60;
    let minutes = duration_minutes % 60;

    if minutes == 0 {
        pluralize(hours, "hour")
    } else {
        format!(
            "{} {}",
            pluralize(hours, "hour"),
            pluralize(minutes, "minute")
        )
    }
}

/// Formats the span of a meeting as seen from the time zone `tz`.
///
/// Same-day meetings print the date once; meetings that cross midnight in
/// `tz` repeat the date on the end clause. Instants whose local time in `tz`
/// falls outside chrono's date range are rendered in UTC instead.
pub fn format_meeting_time_range<Tz>(
    start_time: DateTime<Utc>,
    duration_minutes: u32,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let start = start_time.with_timezone(tz);
    let end = meeting_end_time(start_time, duration_minutes).with_timezone(tz);
    if !has_local_time(&start) || !has_local_time(&end) {
        return format_meeting_time_range(start_time, duration_minutes, &Utc);
    }

    if start.date_naive() == end.date_naive() {
        format!(
            "{}, {} - {}",
            start.format(DAY_FORMAT),
            start.format(CLOCK_FORMAT),
            end.format(CLOCK_FORMAT)
        )
    } else {
        format!(
            "{}, {} - {}, {}",
            start.format(DAY_FORMAT),
            start.format(CLOCK_FORMAT),
            end.format(DAY_FORMAT),
            end.format(CLOCK_FORMAT)
        )
    }
}

/// Whether the wall-clock time of `instant` is representable.
fn has_local_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> bool {
    let offset = instant.offset().fix().local_minus_utc();
    instant
        .naive_utc()
        .checked_add_signed(Duration::seconds(i64::from(offset)))
        .is_some()
}
