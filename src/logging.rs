use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

pub fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("logs")
        .join("folio.log")
}

/// `FOLIO_LOG`, then `RUST_LOG`, then the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to `<data dir>/folio/logs/folio.log`. The terminal belongs to the UI,
/// so stderr is used only when the file cannot be opened.
pub fn init(default_level: &str) {
    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        });

    match file {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}
