//! Console plus a non-rotating log file, both at INFO.

use std::io;
use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Keep the returned guard alive until exit, or buffered file lines are lost.
/// When the log file cannot be opened, logging continues on the console only.
pub fn init_logging(log_path: &str) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .with_filter(LevelFilter::INFO);

    let (file_layer, guard, file_error) = match file_appender(log_path) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_ansi(false)
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Cannot open log file {}: {}", log_path, e);
    }
    guard
}

/// Appends to `log_path` as-is; the directory is created if missing.
fn file_appender(log_path: &str) -> Result<RollingFileAppender, InitError> {
    let path = Path::new(log_path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("matches.log");

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn appender_writes_to_the_configured_file() {
        let dir = std::env::temp_dir().join(format!("match-aggregator-log-{}", std::process::id()));
        let path = dir.join("nested").join("run.log");
        let mut appender = file_appender(path.to_str().unwrap()).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();
        drop(appender);

        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert_eq!(written, "hello\n");
    }

    #[test]
    fn unusable_directory_is_an_error() {
        let blocker = std::env::temp_dir().join(format!("match-aggregator-log-blocker-{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();
        let result = file_appender(blocker.join("matches.log").to_str().unwrap());
        let _ = fs::remove_file(&blocker);
        assert!(result.is_err());
    }
}
