//! Meeting time model: identifiers, durations, time ranges, status, categorization

pub mod categorize;
pub mod error;
pub mod format;
pub mod id;
pub mod meeting;
pub mod tracing;
pub mod zone;

pub use categorize::{
    CategorizedMeetings, MeetingCounts, MeetingReport, ProcessedMeeting, categorize_meetings,
    process_meetings,
};
pub use error::{MeetingError, MeetingResult};
pub use format::{format_meeting_duration, format_meeting_time_range};
pub use id::{
    DEFAULT_MEETING_ID_LENGTH, MEETING_ID_ALPHABET, generate_meeting_id,
    generate_meeting_id_checked,
};
pub use meeting::{Meeting, MeetingStatus, is_meeting_active, meeting_end_time};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use zone::DisplayZone;
