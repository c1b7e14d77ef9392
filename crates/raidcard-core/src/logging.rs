//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a daily file under
//! `${RAIDCARD_HOME}/logs`. One-shot commands log to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "RAIDCARD_LOG";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Routes logs to stderr.
pub fn init_stderr(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Routes logs to `raidcard.log` in `dir`.
///
/// The returned guard flushes the writer on drop; keep it alive for the
/// duration of the program.
pub fn init_file(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "raidcard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}
