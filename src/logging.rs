// File logging.
// The terminal belongs to the TUI, so diagnostics go to a log file instead.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{QuireError, Result};

const DEFAULT_FILTER: &str = "quire=info";

/// Send tracing output to `log_file`. `RUST_LOG` overrides the default filter.
/// The returned guard flushes pending lines when dropped; keep it alive until exit.
pub fn init(log_file: &Path) -> Result<WorkerGuard> {
    let dir = log_file.parent().unwrap_or(Path::new("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| QuireError::Other(format!("invalid log path: {}", log_file.display())))?;
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    // try_init so a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(file_layer)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("state").join("quire.log");

        let guard = init(&log_file).unwrap();
        tracing::info!("hello from test");
        drop(guard);

        assert!(log_file.parent().unwrap().is_dir());
    }

    #[test]
    fn test_init_rejects_path_without_file_name() {
        assert!(init(Path::new("/")).is_err());
    }
}
