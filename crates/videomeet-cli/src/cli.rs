//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// videomeet - meeting ids, durations, time ranges and status buckets
#[derive(Debug, Parser)]
#[command(name = "videomeet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, global = true, env = "VIDEOMEET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random meeting ids
    Id {
        /// Number of characters (defaults to the configured length)
        #[arg(long, short)]
        length: Option<usize>,

        /// Seed for reproducible ids
        #[arg(long)]
        seed: Option<u64>,

        /// How many ids to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Format a duration given in minutes
    Duration {
        /// Duration in minutes
        minutes: u32,
    },

    /// Format the time range of a meeting
    Range {
        /// Start time (RFC 3339, e.g. 2025-03-25T10:00:00Z)
        start: String,

        /// Duration in minutes
        minutes: u32,

        /// Display zone: local, utc or an IANA name
        #[arg(long)]
        tz: Option<String>,
    },

    /// Categorize the meetings in a JSON file
    List {
        /// Path to a meetings document
        file: PathBuf,

        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Display zone: local, utc or an IANA name
        #[arg(long)]
        tz: Option<String>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Sort upcoming by start and past by most recent end
        #[arg(long)]
        sorted: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the default configuration file path
    Path,
    /// Print the effective configuration as TOML
    Dump,
}
