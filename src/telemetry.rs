use crate::error::{Result, ScoreError};
use tracing_subscriber::EnvFilter;

/// Filter directive for the CLI flags. `None` defers to the configured level.
pub fn level_for(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over flags and config.
pub fn init(verbose: u8, quiet: bool, configured_level: &str) -> Result<()> {
    let level = level_for(verbose, quiet).unwrap_or(configured_level);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            ScoreError::ConfigParse(format!("invalid log level/filter '{level}': {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| ScoreError::Telemetry(err.to_string()))
}
