//! Intersect weekly availability across participants.
//!
//! Pairwise interval overlap is lifted to per-day lists, then to whole
//! schedules, then folded across any number of schedules. Everything here is
//! pure: inputs are borrowed, results are freshly allocated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interval::{intersect_pair, Interval};
use crate::schedule::DaySchedule;

/// What to do with a day that only one of two schedules mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDayPolicy {
    /// Absence means "not available": the day is dropped from the result.
    #[default]
    Drop,
    /// The day is copied from the side that has it, unchanged.
    Carry,
}

impl fmt::Display for MissingDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingDayPolicy::Drop => f.write_str("drop"),
            MissingDayPolicy::Carry => f.write_str("carry"),
        }
    }
}

impl FromStr for MissingDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(MissingDayPolicy::Drop),
            "carry" => Ok(MissingDayPolicy::Carry),
            other => Err(format!(
                "unknown missing-day policy '{}', expected 'drop' or 'carry'",
                other
            )),
        }
    }
}

/// Every non-empty overlap between an interval of `list1` and one of `list2`.
///
/// Output order is outer loop over `list1`, inner loop over `list2`. No merging
/// or sorting is done, so overlapping inputs yield overlapping outputs.
pub fn intersect_day_lists(list1: &[Interval], list2: &[Interval]) -> Vec<Interval> {
    let mut result = Vec::new();

    for a in list1 {
        for b in list2 {
            if let Some(overlap) = intersect_pair(a, b) {
                result.push(overlap);
            }
        }
    }

    result
}

/// Intersect two schedules day by day, dropping days that only one side has.
///
/// A day both sides have but with no common window stays in the result with
/// an empty list.
pub fn intersect_schedules(s1: &DaySchedule, s2: &DaySchedule) -> DaySchedule {
    intersect_schedules_with(s1, s2, MissingDayPolicy::Drop)
}

/// Intersect two schedules day by day under an explicit [`MissingDayPolicy`].
pub fn intersect_schedules_with(
    s1: &DaySchedule,
    s2: &DaySchedule,
    policy: MissingDayPolicy,
) -> DaySchedule {
    let mut result = DaySchedule::new();

    for (day, list1) in s1 {
        match s2.get(*day) {
            Some(list2) => {
                result.insert(*day, intersect_day_lists(list1, list2));
            }
            None if policy == MissingDayPolicy::Carry => {
                result.insert(*day, list1.clone());
            }
            None => {}
        }
    }

    if policy == MissingDayPolicy::Carry {
        for (day, list2) in s2 {
            if !s1.contains_day(*day) {
                result.insert(*day, list2.clone());
            }
        }
    }

    result
}

/// Common availability of every schedule, with days missing anywhere dropped.
///
/// - no schedules: an empty schedule
/// - one schedule: that schedule, unchanged
/// - otherwise: a left fold of [`intersect_schedules`] from the first schedule
pub fn intersect_all(schedules: &[DaySchedule]) -> DaySchedule {
    intersect_all_with(schedules, MissingDayPolicy::Drop)
}

/// [`intersect_all`] under an explicit [`MissingDayPolicy`].
pub fn intersect_all_with(schedules: &[DaySchedule], policy: MissingDayPolicy) -> DaySchedule {
    match schedules {
        [] => DaySchedule::new(),
        [only] => only.clone(),
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, next| {
            intersect_schedules_with(&acc, next, policy)
        }),
    }
}
