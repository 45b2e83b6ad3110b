//! Error types for the meeting tools
//!
//! Errors are classified by scope:
//! - Recoverable: malformed schedule entries, skipped with a warning
//! - Fatal: missing input directory, unknown frequency codes, unwritable output

use std::path::PathBuf;
use thiserror::Error;

/// Error types for meeting loading, slot accounting and reporting
#[derive(Debug, Error)]
pub enum MeetingError {
    // Recoverable per-entry errors
    #[error("schedule entry is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unrecognized weekday `{0}`")]
    InvalidWeekday(String),

    #[error("invalid meeting time `{0}` (expected HHMM)")]
    InvalidTime(String),

    // Fatal data errors
    #[error("unknown frequency code `{0}`")]
    UnknownFrequency(String),

    #[error("unable to find meeting directory: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("failed to write CSV file {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // Roster errors (list-ptls)
    #[error("failed to fetch project list: {0}")]
    RosterFetch(#[from] reqwest::Error),

    #[error("failed to parse project list: {0}")]
    RosterParse(#[source] serde_yaml::Error),

    #[error("project `{0}` not found in the project list")]
    UnknownProject(String),

    #[error("project `{0}` has no PTL entry")]
    MissingPtl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeetingError {
    /// Returns true if the accumulator may skip the offending schedule
    /// entry and keep processing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MeetingError::MissingField(_)
                | MeetingError::InvalidWeekday(_)
                | MeetingError::InvalidTime(_)
        )
    }
}
