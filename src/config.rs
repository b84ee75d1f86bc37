//! Command line options

use crate::error::{Error, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "pictoguess.log";

/// Guess the word behind the picture before the clock runs out.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// seed for letter pool shuffling (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// log destination (defaults to the per-user data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// question number the first game begins at
    #[arg(long, default_value_t = 1)]
    pub start_at: usize,
}

impl Args {
    /// Resolve the log file path, falling back to the data directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(LOG_FILE_NAME)),
        }
    }

    /// Zero-based index of the first question.
    pub fn start_index(&self) -> usize {
        self.start_at.saturating_sub(1)
    }
}

/// Get the OS-standard data directory.
///
/// - Linux: `$XDG_DATA_HOME/pictoguess/` or `~/.local/share/pictoguess/`
/// - macOS: `~/Library/Application Support/pictoguess/`
pub fn data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "pictoguess")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(Error::NoDataDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pictoguess"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.log_file, None);
        assert_eq!(args.start_at, 1);
        assert_eq!(args.start_index(), 0);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "pictoguess",
            "--seed",
            "42",
            "--log-file",
            "/tmp/guess.log",
            "--start-at",
            "5",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_path().unwrap(), PathBuf::from("/tmp/guess.log"));
        assert_eq!(args.start_index(), 4);
    }

    #[test]
    fn test_start_at_zero_is_first_question() {
        let args = Args::try_parse_from(["pictoguess", "--start-at", "0"]).unwrap();
        assert_eq!(args.start_index(), 0);
    }

    #[test]
    fn test_bad_seed_rejected() {
        assert!(Args::try_parse_from(["pictoguess", "--seed", "abc"]).is_err());
    }
}
