use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::error::{DashError, Result};

const DEFAULT_FILTER: &str = "warn";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(String),
    Discard,
}

impl LogTarget {
    /// The dashboard owns stdout/stderr while it draws, so without a log
    /// file events are dropped.
    pub fn for_dashboard(log_file: Option<&str>) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_string()),
            None => LogTarget::Discard,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &str) -> Result<File> {
    let path = shellexpand::tilde(path).into_owned();
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber.
pub fn init_logging(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(open_log_file(&path)?))
            .try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| DashError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_dashboard_never_logs_to_stderr() {
        assert_eq!(LogTarget::for_dashboard(None), LogTarget::Discard);
        assert_eq!(
            LogTarget::for_dashboard(Some("dash.log")),
            LogTarget::File("dash.log".to_string())
        );
    }

    #[test]
    fn test_log_file_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dash.log");
        let path = path.to_str().unwrap();

        writeln!(open_log_file(path).unwrap(), "first").unwrap();
        writeln!(open_log_file(path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_log_file_in_missing_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("dash.log");
        let err = open_log_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DashError::Io(_)));
        assert!(err.to_string().starts_with("I/O failed"));
    }
}
