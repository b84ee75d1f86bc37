//! Startup and terminal errors
//!
//! Gameplay itself never fails: ignored input and denied hints are ordinary
//! outcomes of the game API. Only setting up the terminal and the log can.

use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("failed to open log file {path}: {source}")]
    LogFile { path: String, source: io::Error },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
