//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so logs only go to a per-session file
//! under the platform cache directory.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Installs the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// Returns the session log directory.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);
    let session_log_dir = session_log_dir(&log_dir(), &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Keep the writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE_NAME);

    Ok(session_log_dir)
}

/// Platform cache directory for logs, e.g. `~/.cache/dungeon/logs` on Linux.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"))
        .join("logs")
}

/// Creates `<base>/<session_id>` and returns it.
pub fn session_log_dir(base: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = base.join(session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
