//! Half-open numeric time ranges and pairwise overlap.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A half-open time range `[start, end)` on a single day.
///
/// Bounds are plain integers. Minutes since midnight is the usual unit, but any
/// unit works as long as every schedule passed to the engine agrees on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Build an interval, rejecting `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(ScheduleError::EmptyInterval { start, end })
        }
    }

    /// Build an interval in minutes since midnight from two wall-clock times.
    ///
    /// Seconds are truncated. Fails when `end` is not after `start`, so a range
    /// crossing midnight has to be split by the caller.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Self::new(minutes_since_midnight(start), minutes_since_midnight(end))
    }

    /// Length of the interval in the schedule's unit. Zero for degenerate ranges.
    ///
    /// Unsigned so the full `i64` span (e.g. timestamp bounds) fits exactly.
    pub fn duration(&self) -> u64 {
        if self.is_degenerate() {
            0
        } else {
            self.end.abs_diff(self.start)
        }
    }

    /// `true` when `start >= end`; such an interval never overlaps anything.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

fn minutes_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// Overlap of two intervals, or `None` when they share no point in time.
///
/// The overlap is `[max(a.start, b.start), min(a.end, b.end))` and only counts
/// when its start is strictly before its end. Touching intervals
/// (`a.end == b.start`) therefore do not overlap.
pub fn intersect_pair(a: &Interval, b: &Interval) -> Option<Interval> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (start < end).then_some(Interval { start, end })
}
