//! Meeting commands: ids, durations, ranges and bucket listings.

use std::path::Path;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use videomeet_core::{
    DisplayZone, Meeting, ProcessedMeeting, categorize_meetings, format_meeting_duration,
    generate_meeting_id, process_meetings,
};

use super::parse_instant;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::MeetingsDocument;
use crate::render::render_buckets;

/// Options for the `list` command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions<'a> {
    /// Zone override; falls back to the configured zone.
    pub tz: Option<&'a str>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Use the sorted report instead of the input-order partition.
    pub sorted: bool,
}

fn resolve_zone(tz: Option<&str>, config: &CliConfig) -> CliResult<DisplayZone> {
    match tz {
        Some(name) => Ok(name.parse()?),
        None => config.display_zone(),
    }
}

/// Generates `count` ids, one per line.
///
/// A seed makes the output reproducible.
pub fn ids(length: usize, seed: Option<u64>, count: usize) -> String {
    let mut ids = Vec::with_capacity(count);
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            ids.extend((0..count).map(|_| generate_meeting_id(&mut rng, length)));
        }
        None => {
            let mut rng = rand::rng();
            ids.extend((0..count).map(|_| generate_meeting_id(&mut rng, length)));
        }
    }
    ids.join("\n")
}

/// Formats a duration.
pub fn duration(minutes: u32) -> String {
    format_meeting_duration(minutes)
}

/// Formats a time range starting at the RFC 3339 instant `start`.
pub fn range(start: &str, minutes: u32, tz: Option<&str>, config: &CliConfig) -> CliResult<String> {
    let start = parse_instant(start)?;
    let zone = resolve_zone(tz, config)?;
    Ok(zone.format_time_range(start, minutes))
}

/// Categorizes the meetings in `file` at `now`.
pub fn list(
    file: &Path,
    now: DateTime<Utc>,
    options: &ListOptions<'_>,
    config: &CliConfig,
) -> CliResult<String> {
    let zone = resolve_zone(options.tz, config)?;
    let document = MeetingsDocument::load(file)?;
    let meetings = document.meetings();
    debug!(
        count = meetings.len(),
        %now,
        %zone,
        sorted = options.sorted,
        "listing meetings"
    );

    if options.sorted {
        let report = process_meetings(meetings, now, &zone);
        if options.json {
            return Ok(serde_json::to_string_pretty(&report)?);
        }
        return Ok(render_buckets(
            &report.active,
            &report.upcoming,
            &report.past,
            &config.display.no_meeting_text,
        ));
    }

    let buckets = categorize_meetings(meetings, now);
    if options.json {
        return Ok(serde_json::to_string_pretty(&buckets)?);
    }

    Ok(render_buckets(
        &processed(&buckets.active, now, &zone),
        &processed(&buckets.upcoming, now, &zone),
        &processed(&buckets.past, now, &zone),
        &config.display.no_meeting_text,
    ))
}

fn processed<'a>(
    bucket: &[&'a Meeting],
    now: DateTime<Utc>,
    zone: &DisplayZone,
) -> Vec<ProcessedMeeting<'a>> {
    bucket
        .iter()
        .copied()
        .map(|m| ProcessedMeeting::new(m, now, zone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 25, 12, 0, 0).unwrap()
    }

    fn utc_config() -> CliConfig {
        CliConfig {
            timezone: "utc".to_string(),
            ..CliConfig::default()
        }
    }

    /// Writes one active, two upcoming (out of order) and one past meeting.
    fn write_sample(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("meetings.json");
        std::fs::write(
            &path,
            r#"{"meetings": [
                {"id": "late", "title": "Retro", "start_time": "2025-03-25T16:00:00Z",
                 "duration_minutes": 30},
                {"id": "standup", "title": "Weekly Team Standup",
                 "start_time": "2025-03-25T11:30:00Z", "duration_minutes": 60,
                 "participants": ["user1", "user2", "user3"]},
                {"id": "planning", "title": "Project Planning Session",
                 "start_time": "2025-03-25T13:00:00Z", "duration_minutes": 90},
                {"id": "demo", "title": "Client Demo", "start_time": "2025-03-25T09:00:00Z",
                 "duration_minutes": 45, "participants": ["user1"]}
            ]}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn ids_are_reproducible_with_seed() {
        let a = ids(10, Some(7), 3);
        let b = ids(10, Some(7), 3);
        assert_eq!(a, b);
        let lines: Vec<&str> = a.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn ids_without_seed() {
        let output = ids(8, None, 2);
        assert_eq!(output.lines().count(), 2);
        assert!(
            output
                .lines()
                .all(|l| l.chars().all(|c| c.is_ascii_alphanumeric()))
        );
    }

    #[test]
    fn range_with_zone_override() {
        let output = range(
            "2025-03-26T02:00:00Z",
            90,
            Some("America/New_York"),
            &utc_config(),
        )
        .unwrap();
        assert_eq!(output, "Tue, Mar 25, 10:00 PM - 11:30 PM");

        let output = range("2025-03-26T02:00:00Z", 90, None, &utc_config()).unwrap();
        assert_eq!(output, "Wed, Mar 26, 2:00 AM - 3:30 AM");
    }

    #[test]
    fn range_unknown_zone() {
        let err = range(
            "2025-03-26T02:00:00Z",
            90,
            Some("Nowhere/Land"),
            &utc_config(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown time zone: Nowhere/Land");
    }

    #[test]
    fn list_input_order_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(&dir);
        let output = list(&path, now(), &ListOptions::default(), &utc_config()).unwrap();

        let expected = "\
Active (1)
  • Weekly Team Standup [In Progress]
    Tue, Mar 25, 11:30 AM - 12:30 PM (1 hour), 3 participants

Upcoming (2)
  • Retro [Upcoming]
    Tue, Mar 25, 4:00 PM - 4:30 PM (30 minutes), 0 participants
  • Project Planning Session [Upcoming]
    Tue, Mar 25, 1:00 PM - 2:30 PM (1 hour 30 minutes), 0 participants

Past (1)
  • Client Demo [Ended]
    Tue, Mar 25, 9:00 AM - 9:45 AM (45 minutes), 1 participant";
        assert_eq!(output, expected);
    }

    #[test]
    fn list_sorted_orders_upcoming() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(&dir);
        let options = ListOptions {
            sorted: true,
            ..ListOptions::default()
        };
        let output = list(&path, now(), &options, &utc_config()).unwrap();

        let planning = output.find("Project Planning Session").unwrap();
        let retro = output.find("Retro").unwrap();
        assert!(planning < retro);
    }

    #[test]
    fn list_sorted_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(&dir);
        let options = ListOptions {
            json: true,
            sorted: true,
            ..ListOptions::default()
        };
        let output = list(&path, now(), &options, &utc_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["counts"]["total"], 4);
        assert_eq!(value["upcoming"][0]["id"], "planning");
        assert_eq!(value["upcoming"][1]["id"], "late");
        assert_eq!(value["active"][0]["is_active"], true);
    }

    #[test]
    fn list_partition_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(&dir);
        let options = ListOptions {
            json: true,
            ..ListOptions::default()
        };
        let output = list(&path, now(), &options, &utc_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["active"][0]["id"], "standup");
        assert_eq!(value["upcoming"][0]["id"], "late");
        assert_eq!(value["past"][0]["id"], "demo");
    }

    #[test]
    fn list_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        let output = list(&path, now(), &ListOptions::default(), &utc_config()).unwrap();
        assert_eq!(output, "No meetings");
    }
}
