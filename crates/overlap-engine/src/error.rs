//! Error types for overlap-engine boundary operations.
//!
//! The intersection functions themselves never fail. These errors come from
//! decoding, validation, and the schedule stores.

use std::path::PathBuf;

use thiserror::Error;

use crate::schedule::Day;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The schedule blob was not valid JSON, or had the wrong shape
    /// (unknown day name, non-numeric bound, missing field).
    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An interval inside a schedule had `start >= end`.
    #[error("Invalid interval on {day} at index {index}: start {start} is not before end {end}")]
    InvalidInterval {
        day: Day,
        index: usize,
        start: i64,
        end: i64,
    },

    /// A standalone interval was constructed with `start >= end`.
    #[error("Empty interval: start {start} is not before end {end}")]
    EmptyInterval { start: i64, end: i64 },

    #[error("Invalid participant id: {0:?}")]
    InvalidParticipant(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the requested participants has a stored schedule.
    #[error("No stored availability for any of the requested participants")]
    NoParticipants,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
