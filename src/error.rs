use std::io;

use thiserror::Error;

/// Why a player name was refused at game start.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum NameError {
    #[error("please enter a name")]
    Empty,
    #[error("'{0}' is not allowed; only English letters and numbers")]
    InvalidCharacter(char),
}

/// Failure to read or write the recent-results document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("results storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("results storage is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}
