//! Error types for loading and querying the schedule.

use std::path::PathBuf;

use thiserror::Error;

/// The raw document could not be fetched or did not match the schedule schema.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed schedule document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A day index outside the loaded schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("day index {index} is out of range (schedule has {days} days)")]
    DayOutOfRange { index: usize, days: usize },
}

/// Errors from operations that load on demand and then filter.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
