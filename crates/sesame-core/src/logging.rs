//! Tracing setup.
//!
//! The TUI owns stdout/stderr, so events go to a daily rolling file under
//! `$SESAME_HOME/logs/`. The filter comes from `SESAME_LOG` when set, else
//! from `Config::log_level`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, paths};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SESAME_LOG";

const LOG_FILE_PREFIX: &str = "sesame.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the whole process; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `dir`.
///
/// # Errors
/// Returns an error if `dir` cannot be created or a global subscriber is
/// already installed.
pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
