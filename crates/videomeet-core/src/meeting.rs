//! Meeting records and their temporal status.
//!
//! This module provides:
//! - [`Meeting`]: a caller-owned meeting record
//! - [`MeetingStatus`]: whether a meeting is active, upcoming or past
//! - [`is_meeting_active`]: the closed-interval activity predicate
//!
//! All derived values (end time, status) are computed on demand from the
//! start time, the duration and an explicit reference instant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MeetingError;

/// Returns the end instant of a meeting.
///
/// Saturates at the largest representable instant instead of overflowing.
pub fn meeting_end_time(start_time: DateTime<Utc>, duration_minutes: u32) -> DateTime<Utc> {
    start_time
        .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Returns true if `now` lies within `[start_time, start_time + duration]`.
///
/// Both boundaries are inclusive: a meeting is active at its exact start
/// instant and at its exact end instant.
pub fn is_meeting_active(
    start_time: DateTime<Utc>,
    duration_minutes: u32,
    now: DateTime<Utc>,
) -> bool {
    start_time <= now && now <= meeting_end_time(start_time, duration_minutes)
}

/// The temporal status of a meeting relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// The reference instant falls within the meeting (inclusive).
    Active,
    /// The meeting starts strictly after the reference instant.
    Upcoming,
    /// Anything else: the meeting ended before the reference instant.
    Past,
}

impl MeetingStatus {
    /// Classifies a meeting, checking active first, then upcoming.
    pub fn classify(start_time: DateTime<Utc>, duration_minutes: u32, now: DateTime<Utc>) -> Self {
        if is_meeting_active(start_time, duration_minutes, now) {
            Self::Active
        } else if start_time > now {
            Self::Upcoming
        } else {
            Self::Past
        }
    }

    /// Returns the machine-readable name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    /// Returns the label shown next to a meeting card.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "In Progress",
            Self::Upcoming => "Upcoming",
            Self::Past => "Ended",
        }
    }
}

/// A meeting as supplied by the caller.
///
/// The model only ever reads these fields. Negative durations in serialized
/// input are rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeeting")]
pub struct Meeting {
    /// Opaque identifier.
    pub id: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the meeting starts.
    pub start_time: DateTime<Utc>,
    /// Length of the meeting in minutes.
    pub duration_minutes: u32,
    /// Participant identifiers, in invitation order.
    pub participants: Vec<String>,
}

impl Meeting {
    /// Creates a meeting with no title, description or participants.
    pub fn new(id: impl Into<String>, start_time: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            start_time,
            duration_minutes,
            participants: Vec::new(),
        }
    }

    /// Builder method to set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to add a participant.
    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participants.push(participant.into());
        self
    }

    /// Builder method to set all participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the end instant (`start_time + duration_minutes`).
    pub fn end_time(&self) -> DateTime<Utc> {
        meeting_end_time(self.start_time, self.duration_minutes)
    }

    /// Returns true if the meeting is active at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        is_meeting_active(self.start_time, self.duration_minutes, now)
    }

    /// Returns the status of the meeting at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> MeetingStatus {
        MeetingStatus::classify(self.start_time, self.duration_minutes, now)
    }

    /// Returns the number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Wire shape of a meeting before validation.
#[derive(Deserialize)]
struct RawMeeting {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    start_time: DateTime<Utc>,
    duration_minutes: i64,
    #[serde(default)]
    participants: Option<Vec<String>>,
}

impl TryFrom<RawMeeting> for Meeting {
    type Error = MeetingError;

    fn try_from(raw: RawMeeting) -> Result<Self, Self::Error> {
        let duration_minutes = u32::try_from(raw.duration_minutes).map_err(|_| {
            let reason = if raw.duration_minutes < 0 {
                format!("must be non-negative, got {}", raw.duration_minutes)
            } else {
                format!("too large, got {}", raw.duration_minutes)
            };
            MeetingError::invalid_argument("duration_minutes", reason)
        })?;

        Ok(Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            start_time: raw.start_time,
            duration_minutes,
            participants: raw.participants.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    mod active_predicate {
        use super::*;

        #[test]
        fn inclusive_boundaries() {
            let start = utc(2025, 3, 25, 10, 0, 0);

            // At start
            assert!(is_meeting_active(start, 60, start));
            // At end, exact minute
            assert!(is_meeting_active(start, 60, utc(2025, 3, 25, 11, 0, 0)));
            // During
            assert!(is_meeting_active(start, 60, utc(2025, 3, 25, 10, 30, 0)));
        }

        #[test]
        fn end_boundary_relative_to_now() {
            let now = utc(2025, 3, 25, 12, 0, 0);
            assert!(is_meeting_active(now, 60, now));
            assert!(is_meeting_active(now - Duration::minutes(60), 60, now));
        }

        #[test]
        fn outside_interval() {
            let start = utc(2025, 3, 25, 10, 0, 0);
            for duration in [0, 1, 45, 60, 600] {
                let end = meeting_end_time(start, duration);
                assert!(!is_meeting_active(start, duration, start - Duration::seconds(1)));
                assert!(!is_meeting_active(start, duration, end + Duration::seconds(1)));
            }
        }

        #[test]
        fn zero_duration_is_active_only_at_start() {
            let start = utc(2025, 3, 25, 10, 0, 0);
            assert!(is_meeting_active(start, 0, start));
            assert_eq!(
                MeetingStatus::classify(start, 0, start + Duration::seconds(1)),
                MeetingStatus::Past
            );
            assert_eq!(
                MeetingStatus::classify(start, 0, start - Duration::seconds(1)),
                MeetingStatus::Upcoming
            );
        }

        #[test]
        fn end_time_saturates() {
            let end = meeting_end_time(DateTime::<Utc>::MAX_UTC, 30);
            assert_eq!(end, DateTime::<Utc>::MAX_UTC);
        }
    }

    mod status {
        use super::*;

        #[test]
        fn classification() {
            let now = utc(2025, 3, 25, 12, 0, 0);

            let ongoing = Meeting::new("a", now - Duration::minutes(30), 60);
            assert_eq!(ongoing.status_at(now), MeetingStatus::Active);

            let later = Meeting::new("b", now + Duration::minutes(60), 90);
            assert_eq!(later.status_at(now), MeetingStatus::Upcoming);

            let earlier = Meeting::new("c", now - Duration::hours(3), 45);
            assert_eq!(earlier.status_at(now), MeetingStatus::Past);
        }

        #[test]
        fn names() {
            assert_eq!(MeetingStatus::Active.as_str(), "active");
            assert_eq!(MeetingStatus::Upcoming.as_str(), "upcoming");
            assert_eq!(MeetingStatus::Past.as_str(), "past");
            assert_eq!(MeetingStatus::Active.display_name(), "In Progress");
            assert_eq!(MeetingStatus::Past.display_name(), "Ended");
        }

        #[test]
        fn serde_names() {
            let json = serde_json::to_string(&MeetingStatus::Upcoming).unwrap();
            assert_eq!(json, "\"upcoming\"");
        }
    }

    mod meeting {
        use super::*;

        #[test]
        fn builder_pattern() {
            let meeting = Meeting::new("m-1", utc(2025, 3, 25, 10, 0, 0), 30)
                .with_title("Weekly Team Standup")
                .with_description("Discuss progress and blockers")
                .with_participants(["user1", "user2"])
                .with_participant("user3");

            assert_eq!(meeting.title.as_deref(), Some("Weekly Team Standup"));
            assert!(meeting.description.is_some());
            assert_eq!(meeting.participant_count(), 3);
            assert_eq!(meeting.end_time(), utc(2025, 3, 25, 10, 30, 0));
        }

        #[test]
        fn deserialize_defaults() {
            let json = r#"{
                "id": "abc",
                "start_time": "2025-03-25T10:00:00Z",
                "duration_minutes": 45
            }"#;
            let meeting: Meeting = serde_json::from_str(json).unwrap();
            assert_eq!(meeting.id, "abc");
            assert!(meeting.title.is_none());
            assert!(meeting.participants.is_empty());
            assert_eq!(meeting.duration_minutes, 45);
        }

        #[test]
        fn deserialize_null_participants() {
            let json = r#"{
                "id": "abc",
                "start_time": "2025-03-25T10:00:00+02:00",
                "duration_minutes": 5,
                "participants": null
            }"#;
            let meeting: Meeting = serde_json::from_str(json).unwrap();
            assert!(meeting.participants.is_empty());
            assert_eq!(meeting.start_time, utc(2025, 3, 25, 8, 0, 0));
        }

        #[test]
        fn deserialize_rejects_negative_duration() {
            let json = r#"{
                "id": "abc",
                "start_time": "2025-03-25T10:00:00Z",
                "duration_minutes": -5
            }"#;
            let err = serde_json::from_str::<Meeting>(json).unwrap_err();
            assert!(err.to_string().contains("must be non-negative, got -5"));
        }

        #[test]
        fn serde_roundtrip() {
            let meeting = Meeting::new("m-1", utc(2025, 3, 25, 10, 0, 0), 30)
                .with_title("Client Demo")
                .with_participant("user1");
            let json = serde_json::to_string(&meeting).unwrap();
            let parsed: Meeting = serde_json::from_str(&json).unwrap();
            assert_eq!(meeting, parsed);
        }
    }
}
