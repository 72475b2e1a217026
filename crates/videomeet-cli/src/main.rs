//! videomeet CLI entry point.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::warn;

use videomeet_cli::cli::Cli;
use videomeet_cli::commands;
use videomeet_cli::config::CliConfig;
use videomeet_cli::error::CliResult;
use videomeet_core::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::quiet()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // An explicit path must load; the default location falls back to defaults
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path)?,
        None => CliConfig::load().unwrap_or_else(|e| {
            warn!("ignoring config: {}", e);
            CliConfig::default()
        }),
    };

    let output = commands::execute(&cli.command, &config, Utc::now())?;
    println!("{}", output);
    Ok(())
}
