//! Config command implementations.

use crate::config::CliConfig;
use crate::error::CliResult;

/// Returns the default configuration file path.
pub fn path() -> String {
    CliConfig::default_path().display().to_string()
}

/// Returns the effective configuration as TOML.
pub fn dump(config: &CliConfig) -> CliResult<String> {
    config.to_toml()
}
