//! Log setup
//!
//! The TUI owns the terminal, so log lines go to a file in the taskdeck root
//! rather than stderr. `TASKDECK_LOG` takes an `EnvFilter` directive and
//! defaults to `warn`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Result;
use crate::paths::log_dir;

pub const LOG_ENV: &str = "TASKDECK_LOG";
pub const LOG_FILE: &str = "taskdeck.log";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Keeps the background log writer alive; dropping it flushes pending lines
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    pub log_path: PathBuf,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `<root>/taskdeck.log`
///
/// Returns `Ok(None)` if a subscriber was already installed.
pub fn init() -> Result<Option<LoggingGuard>> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .is_ok();

    if !installed {
        return Ok(None);
    }

    let log_path = dir.join(LOG_FILE);
    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(Some(LoggingGuard {
        _file_guard: file_guard,
        log_path,
    }))
}
