//! Error types for price_tracker

use std::fmt;
use std::path::PathBuf;

/// Unified error type for snapshot comparison and history extraction
#[derive(Debug)]
pub enum TrackerError {
    /// No snapshot file at the resolved path
    SnapshotNotFound(PathBuf),
    /// Date string not in YYYY-MM-DD format
    InvalidDate(String),
    /// Card header line did not match the expected shape
    UnparseableHeader(String),
    /// Table row did not yield the expected numeric fields
    UnparseableRow(String),
    /// History log is missing the two border rows above an occurrence
    MalformedHistory { line: usize },
    /// No YYYY-MM-DD stamp on the line above the table's top border
    NoDateStamp { line: usize },
    /// No usable history points for a card
    NoHistory(String),
    /// File I/O error
    Io(std::io::Error),
    /// CSV export failed
    Csv(csv::Error),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::SnapshotNotFound(path) => {
                write!(f, "Snapshot not found: {}", path.display())
            }
            TrackerError::InvalidDate(s) => {
                write!(f, "Invalid date format, expected YYYY-MM-DD: {}", s)
            }
            TrackerError::UnparseableHeader(line) => {
                write!(f, "Could not parse card header: '{}'", line)
            }
            TrackerError::UnparseableRow(line) => {
                write!(f, "Could not parse table row: '{}'", line)
            }
            TrackerError::MalformedHistory { line } => {
                write!(f, "Fewer than two table borders above line {}", line)
            }
            TrackerError::NoDateStamp { line } => {
                write!(f, "No date stamp found on line {}", line)
            }
            TrackerError::NoHistory(card) => {
                write!(f, "No history points for card: {}", card)
            }
            TrackerError::Io(e) => write!(f, "I/O error: {}", e),
            TrackerError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Io(e) => Some(e),
            TrackerError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Io(err)
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Csv(err)
    }
}

/// Result alias for price_tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
