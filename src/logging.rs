//! Log file setup
//!
//! The terminal UI owns stdout and stderr, so logs go to
//! `<directory>/calctty.log` through a non-blocking writer. The filter comes from
//! `CALCTTY_LOG` when set, otherwise from the configured directive.

use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "CALCTTY_LOG";

pub const LOG_FILE_NAME: &str = "calctty.log";

/// Build the filter: `CALCTTY_LOG` wins, then `fallback`, then `calctty=info`
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("calctty=info"))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &LoggingConfig) -> io::Result<WorkerGuard> {
    fs::create_dir_all(&config.directory)?;

    let appender = tracing_appender::rolling::never(&config.directory, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.filter))
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(guard)
}
