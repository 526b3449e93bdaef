use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Environment variable holding an `EnvFilter` directive that overrides `log.level`.
const LOG_ENV: &str = "REPRISE_LOG";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to the log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr.
/// Returns the log path, or `None` when logging stays disabled.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(default_log_path)?;
    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("reprise: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&settings.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
