//! # Error — Failure Taxonomy for Draws and Saved Batches
//!
//! Every library operation returns `Result<T, LotteryError>`. The variants
//! split into two families:
//!
//! - **Table errors** (`UnknownFormat`, `InsufficientRange`): the built-in
//!   rule table is wrong or was bypassed. Unrecoverable for the action.
//! - **User-action errors** (`InvalidLineCount`, `NotFound`, `CorruptRecord`,
//!   `Io`): reported back as a status message by the session layer.

use std::fmt;
use std::path::PathBuf;

/// Errors from rule lookup, drawing, and the saved-batch store.
#[derive(Debug)]
pub enum LotteryError {
    /// Format name is not one of the built-in lotteries.
    UnknownFormat(String),
    /// A rule asks for more unique numbers than its range holds.
    InsufficientRange {
        requested: u32,
        available: u32,
    },
    /// Requested line count is outside `[MIN_LINES, MAX_LINES]`.
    InvalidLineCount(u32),
    /// No saved batch exists for the format.
    NotFound(PathBuf),
    /// Saved batch exists but failed checksum or schema validation.
    CorruptRecord { path: PathBuf, reason: String },
    Io(std::io::Error),
}

impl LotteryError {
    /// True for errors caused by a broken rule table rather than user input
    /// or the filesystem.
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            LotteryError::UnknownFormat(_) | LotteryError::InsufficientRange { .. }
        )
    }
}

impl fmt::Display for LotteryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotteryError::UnknownFormat(name) => write!(f, "unknown lottery format '{}'", name),
            LotteryError::InsufficientRange {
                requested,
                available,
            } => write!(
                f,
                "cannot draw {} unique numbers from a range of {}",
                requested, available
            ),
            LotteryError::InvalidLineCount(n) => write!(
                f,
                "line count {} is outside {}..={}",
                n,
                crate::MIN_LINES,
                crate::MAX_LINES
            ),
            LotteryError::NotFound(path) => write!(f, "File <{}> is missing", path.display()),
            LotteryError::CorruptRecord { path, reason } => {
                write!(f, "saved file <{}> is corrupt: {}", path.display(), reason)
            }
            LotteryError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LotteryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LotteryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LotteryError {
    fn from(e: std::io::Error) -> Self {
        LotteryError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;
