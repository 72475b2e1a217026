//! Meetings documents read from disk.
//!
//! A document is a JSON object with a `meetings` array:
//!
//! ```json
//! {
//!   "meetings": [
//!     {
//!       "id": "aB3dE5fG7h",
//!       "title": "Weekly Team Standup",
//!       "start_time": "2025-03-25T10:00:00Z",
//!       "duration_minutes": 60,
//!       "participants": ["user1", "user2"]
//!     }
//!   ]
//! }
//! ```
//!
//! A `meetings` value that is missing or not an array reads as an empty
//! list. Errors inside the array's entries still fail the parse.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;
use videomeet_core::Meeting;

use crate::error::{CliError, CliResult};

/// The top-level shape of a meetings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingsDocument {
    #[serde(default, deserialize_with = "meetings_or_empty")]
    meetings: Vec<Meeting>,
}

fn meetings_or_empty<'de, D>(deserializer: D) -> Result<Vec<Meeting>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => {
            Vec::<Meeting>::deserialize(value).map_err(serde::de::Error::custom)
        }
        other => {
            debug!(kind = value_kind(&other), "meetings is not an array, using none");
            Ok(Vec::new())
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl MeetingsDocument {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a document from a file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            count = document.meetings().len(),
            "loaded meetings"
        );
        Ok(document)
    }

    /// Returns the meetings, or an empty slice when none were supplied.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }
}
