//! Logging setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `<data_local_dir>/stockview/stockview.log`, or `./stockview.log` when the
/// platform has no data directory.
pub fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("stockview").join("stockview.log"),
        None => PathBuf::from("stockview.log"),
    }
}

/// `RUST_LOG` wins over the configured directive.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global subscriber appending plain-text lines to `path`.
pub fn init_file_logging(path: &Path, default_directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_thread_names(true),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}
