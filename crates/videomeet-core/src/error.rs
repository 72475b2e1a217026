//! Error types for the meeting time model.

use thiserror::Error;

/// Result type for meeting model operations.
pub type MeetingResult<T> = Result<T, MeetingError>;

/// Errors that can occur while building or formatting meetings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingError {
    /// A caller-supplied value is outside the accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The time zone name is neither `local`, `utc`, nor a known IANA zone.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}

impl MeetingError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
