//! Terminal rendering of meeting buckets.

use videomeet_core::{MeetingStatus, ProcessedMeeting};

const UNTITLED: &str = "Untitled meeting";

fn section_title(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Active => "Active",
        MeetingStatus::Upcoming => "Upcoming",
        MeetingStatus::Past => "Past",
    }
}

fn participants_label(count: usize) -> String {
    if count == 1 {
        "1 participant".to_string()
    } else {
        format!("{count} participants")
    }
}

/// Renders one meeting as a two-line bullet entry.
pub fn render_meeting(processed: &ProcessedMeeting<'_>) -> String {
    let title = processed.meeting.title.as_deref().unwrap_or(UNTITLED);
    format!(
        "  • {} [{}]\n    {} ({}), {}",
        title,
        processed.status.display_name(),
        processed.time_range,
        processed.duration,
        participants_label(processed.participant_count)
    )
}

/// Renders the three buckets as titled sections, skipping empty ones.
///
/// Returns `no_meeting_text` when every bucket is empty.
pub fn render_buckets(
    active: &[ProcessedMeeting<'_>],
    upcoming: &[ProcessedMeeting<'_>],
    past: &[ProcessedMeeting<'_>],
    no_meeting_text: &str,
) -> String {
    let sections = [
        (MeetingStatus::Active, active),
        (MeetingStatus::Upcoming, upcoming),
        (MeetingStatus::Past, past),
    ];

    let rendered: Vec<String> = sections
        .iter()
        .filter(|(_, meetings)| !meetings.is_empty())
        .map(|(status, meetings)| {
            let mut lines = vec![format!("{} ({})", section_title(*status), meetings.len())];
            lines.extend(meetings.iter().map(render_meeting));
            lines.join("\n")
        })
        .collect();

    if rendered.is_empty() {
        no_meeting_text.to_string()
    } else {
        rendered.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use videomeet_core::{DisplayZone, Meeting};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn participant_labels() {
        assert_eq!(participants_label(0), "0 participants");
        assert_eq!(participants_label(1), "1 participant");
        assert_eq!(participants_label(5), "5 participants");
    }

    #[test]
    fn single_meeting_entry() {
        let meeting = Meeting::new("standup", now() - Duration::minutes(30), 60)
            .with_title("Weekly Team Standup")
            .with_participants(["user1", "user2"]);
        let processed = ProcessedMeeting::new(&meeting, now(), &DisplayZone::Utc);

        assert_eq!(
            render_meeting(&processed),
            "  • Weekly Team Standup [In Progress]\n    \
             Tue, Mar 25, 11:30 AM - 12:30 PM (1 hour), 2 participants"
        );
    }

    #[test]
    fn untitled_meeting() {
        let meeting = Meeting::new("x", now() + Duration::hours(1), 15);
        let processed = ProcessedMeeting::new(&meeting, now(), &DisplayZone::Utc);
        assert!(render_meeting(&processed).starts_with("  • Untitled meeting [Upcoming]"));
    }

    #[test]
    fn skips_empty_sections() {
        let meeting = Meeting::new("demo", now() - Duration::hours(3), 45)
            .with_title("Client Demo");
        let past = [ProcessedMeeting::new(&meeting, now(), &DisplayZone::Utc)];

        let output = render_buckets(&[], &[], &past, "No meetings");
        assert_eq!(
            output,
            "Past (1)\n  • Client Demo [Ended]\n    \
             Tue, Mar 25, 9:00 AM - 9:45 AM (45 minutes), 0 participants"
        );
    }

    #[test]
    fn no_meetings_text() {
        assert_eq!(render_buckets(&[], &[], &[], "Nothing today"), "Nothing today");
    }
}
