//! Command implementations.
//!
//! Every command returns its output as a string; `main` prints it.

pub mod config;
pub mod meetings;

use chrono::{DateTime, Utc};

use crate::cli::{Command, ConfigAction};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Runs `command`, using `now` wherever no reference instant was given.
pub fn execute(command: &Command, config: &CliConfig, now: DateTime<Utc>) -> CliResult<String> {
    match command {
        Command::Id {
            length,
            seed,
            count,
        } => Ok(meetings::ids(length.unwrap_or(config.id_length), *seed, *count)),
        Command::Duration { minutes } => Ok(meetings::duration(*minutes)),
        Command::Range { start, minutes, tz } => {
            meetings::range(start, *minutes, tz.as_deref(), config)
        }
        Command::List {
            file,
            now: at,
            tz,
            json,
            sorted,
        } => {
            let at = match at {
                Some(value) => parse_instant(value)?,
                None => now,
            };
            let options = meetings::ListOptions {
                tz: tz.as_deref(),
                json: *json,
                sorted: *sorted || config.display.sorted,
            };
            meetings::list(file, at, &options, config)
        }
        Command::Config { action } => match action {
            ConfigAction::Path => Ok(config::path()),
            ConfigAction::Dump => config::dump(config),
        },
    }
}

/// Parses an RFC 3339 instant into UTC.
pub fn parse_instant(value: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidTime {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
