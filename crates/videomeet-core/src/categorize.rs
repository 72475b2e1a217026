//! Partitioning meetings into active, upcoming and past buckets.
//!
//! Two entry points:
//! - [`categorize_meetings`]: a stable partition that keeps input order
//! - [`process_meetings`]: builds a display-ready [`MeetingReport`] with
//!   per-meeting flags and strings, sorting the upcoming bucket by start
//!   time and the past bucket by most recent end time

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::format::format_meeting_duration;
use crate::meeting::{Meeting, MeetingStatus};
use crate::zone::DisplayZone;

/// Meetings grouped by status, each bucket in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedMeetings<'a> {
    /// Meetings in progress at the reference instant.
    pub active: Vec<&'a Meeting>,
    /// Meetings that have not started yet.
    pub upcoming: Vec<&'a Meeting>,
    /// Meetings that are over.
    pub past: Vec<&'a Meeting>,
}

impl<'a> CategorizedMeetings<'a> {
    /// Returns three empty buckets.
    pub fn empty() -> Self {
        Self {
            active: Vec::new(),
            upcoming: Vec::new(),
            past: Vec::new(),
        }
    }

    /// Returns the bucket for a status.
    pub fn bucket(&self, status: MeetingStatus) -> &[&'a Meeting] {
        match status {
            MeetingStatus::Active => &self.active,
            MeetingStatus::Upcoming => &self.upcoming,
            MeetingStatus::Past => &self.past,
        }
    }

    /// Returns the total number of categorized meetings.
    pub fn len(&self) -> usize {
        self.active.len() + self.upcoming.len() + self.past.len()
    }

    /// Returns true if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CategorizedMeetings<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Partitions `meetings` by their status at `now`.
///
/// Each meeting lands in exactly one bucket: active if `now` is inside its
/// closed interval, else upcoming if it starts after `now`, else past.
pub fn categorize_meetings(meetings: &[Meeting], now: DateTime<Utc>) -> CategorizedMeetings<'_> {
    let mut result = CategorizedMeetings::empty();

    for meeting in meetings {
        let status = meeting.status_at(now);
        trace!(id = %meeting.id, status = status.as_str(), "categorized meeting");
        match status {
            MeetingStatus::Active => result.active.push(meeting),
            MeetingStatus::Upcoming => result.upcoming.push(meeting),
            MeetingStatus::Past => result.past.push(meeting),
        }
    }

    debug!(
        active = result.active.len(),
        upcoming = result.upcoming.len(),
        past = result.past.len(),
        "categorized meetings"
    );

    result
}

/// A meeting with its derived flags and display strings.
///
/// Exactly one of `is_active`, `is_past` and `is_upcoming` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedMeeting<'a> {
    /// The underlying record.
    #[serde(flatten)]
    pub meeting: &'a Meeting,
    /// Bucket the meeting was placed in.
    pub status: MeetingStatus,
    /// `now` lies inside the closed meeting interval.
    pub is_active: bool,
    /// The meeting ended strictly before `now`.
    pub is_past: bool,
    /// The meeting starts strictly after `now`.
    pub is_upcoming: bool,
    /// Formatted time range in the report's display zone.
    pub time_range: String,
    /// Formatted duration.
    pub duration: String,
    /// Number of participants.
    pub participant_count: usize,
}

impl<'a> ProcessedMeeting<'a> {
    /// Builds the processed view of `meeting` at `now`.
    pub fn new(meeting: &'a Meeting, now: DateTime<Utc>, zone: &DisplayZone) -> Self {
        let end = meeting.end_time();
        Self {
            meeting,
            status: meeting.status_at(now),
            is_active: meeting.is_active_at(now),
            is_past: end < now,
            is_upcoming: meeting.start_time > now,
            time_range: zone.format_time_range(meeting.start_time, meeting.duration_minutes),
            duration: format_meeting_duration(meeting.duration_minutes),
            participant_count: meeting.participant_count(),
        }
    }
}

/// Bucket sizes of a [`MeetingReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeetingCounts {
    /// Number of input meetings.
    pub total: usize,
    /// Size of the active bucket.
    pub active: usize,
    /// Size of the upcoming bucket.
    pub upcoming: usize,
    /// Size of the past bucket.
    pub past: usize,
}

/// The full processing result for a list of meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingReport<'a> {
    /// Every meeting, in input order.
    pub all: Vec<ProcessedMeeting<'a>>,
    /// Active meetings, in input order.
    pub active: Vec<ProcessedMeeting<'a>>,
    /// Upcoming meetings, soonest first.
    pub upcoming: Vec<ProcessedMeeting<'a>>,
    /// Past meetings, most recently ended first.
    pub past: Vec<ProcessedMeeting<'a>>,
    /// Bucket sizes.
    pub counts: MeetingCounts,
}

/// Processes `meetings` at `now`, rendering strings in `zone`.
///
/// Sorting is stable: meetings with equal keys keep their input order.
pub fn process_meetings<'a>(
    meetings: &'a [Meeting],
    now: DateTime<Utc>,
    zone: &DisplayZone,
) -> MeetingReport<'a> {
    let all: Vec<ProcessedMeeting<'a>> = meetings
        .iter()
        .map(|m| ProcessedMeeting::new(m, now, zone))
        .collect();

    let mut active = Vec::new();
    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for processed in &all {
        match processed.status {
            MeetingStatus::Active => active.push(processed.clone()),
            MeetingStatus::Upcoming => upcoming.push(processed.clone()),
            MeetingStatus::Past => past.push(processed.clone()),
        }
    }

    upcoming.sort_by_key(|p| p.meeting.start_time);
    past.sort_by(|a, b| b.meeting.end_time().cmp(&a.meeting.end_time()));

    let counts = MeetingCounts {
        total: all.len(),
        active: active.len(),
        upcoming: upcoming.len(),
        past: past.len(),
    };
    debug!(
        total = counts.total,
        active = counts.active,
        upcoming = counts.upcoming,
        past = counts.past,
        zone = %zone,
        "processed meetings"
    );

    MeetingReport {
        all,
        active,
        upcoming,
        past,
        counts,
    }
}
