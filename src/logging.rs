use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::APP_NAME;

pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_NAME).join(format!("{APP_NAME}.log")))
}

/// Route `tracing` output to the log file; stdout belongs to the terminal UI.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create log dir {}", dir.display()))?;
    }
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}
