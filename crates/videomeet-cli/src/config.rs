//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/videomeet/config.toml` by default:
//!
//! ```toml
//! timezone = "Europe/Paris"
//! id_length = 12
//!
//! [display]
//! sorted = true
//! no_meeting_text = "Nothing scheduled"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use videomeet_core::{DEFAULT_MEETING_ID_LENGTH, DisplayZone};

use crate::error::{CliError, CliResult};

/// Configuration for the videomeet CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Zone used to render time ranges: `local`, `utc` or an IANA name.
    pub timezone: String,

    /// Length of generated meeting ids.
    pub id_length: usize,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            timezone: DisplayZone::Local.to_string(),
            id_length: DEFAULT_MEETING_ID_LENGTH,
            display: DisplaySettings::default(),
        }
    }
}

/// Display settings for meeting lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Sort upcoming by start and past by most recent end.
    pub sorted: bool,

    /// Text to show when there are no meetings.
    pub no_meeting_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sorted: false,
            no_meeting_text: "No meetings".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("videomeet")
    }

    /// Resolves the configured display zone.
    pub fn display_zone(&self) -> CliResult<DisplayZone> {
        Ok(self.timezone.parse()?)
    }

    /// Serializes the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))
    }
}
