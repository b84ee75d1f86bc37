//! File-backed logging
//!
//! The terminal is owned by the UI while the game runs, so log records are
//! piped to a file instead of stderr. The filter comes from `RUST_LOG`.

use crate::error::{Error, Result};
use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Install the global logger, appending to `path`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::LogFile {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.display().to_string(),
            source,
        })?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}
