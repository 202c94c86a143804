//! Weekly availability model: days of the week mapped to interval lists.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;

/// A day of the week, serialized by its English name (`"Monday"`).
///
/// Ordering follows the ISO week, Monday first.
///
/// JSON keys must match the name exactly, so stored blobs have one spelling
/// per day. [`FromStr`] is for human input (CLI arguments, config) and accepts
/// any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = String;

    /// Accepts the full English name, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown day: {s:?}"))
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl From<Day> for Weekday {
    fn from(d: Day) -> Self {
        match d {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

/// One participant's weekly availability.
///
/// A day that is absent means "no availability that day". A day that is
/// present with an empty list means "considered, nothing free"; intersection
/// results use the latter for days both sides had but that share no window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    days: BTreeMap<Day, Vec<Interval>>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intervals for `day`, returning whatever was there before.
    pub fn insert(&mut self, day: Day, intervals: Vec<Interval>) -> Option<Vec<Interval>> {
        self.days.insert(day, intervals)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_day(mut self, day: Day, intervals: Vec<Interval>) -> Self {
        self.days.insert(day, intervals);
        self
    }

    pub fn get(&self, day: Day) -> Option<&[Interval]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn contains_day(&self, day: Day) -> bool {
        self.days.contains_key(&day)
    }

    /// Days present in the schedule, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Day, Vec<Interval>> {
        self.days.iter()
    }

    /// Number of days present (including days with no intervals).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Summed interval length per present day, saturating at `u64::MAX`.
    ///
    /// Overlapping intervals are counted once each, not merged.
    pub fn total_per_day(&self) -> BTreeMap<Day, u64> {
        self.days
            .iter()
            .map(|(day, intervals)| {
                let total = intervals
                    .iter()
                    .map(Interval::duration)
                    .fold(0u64, u64::saturating_add);
                (*day, total)
            })
            .collect()
    }

    /// Check that every interval has `start < end`.
    ///
    /// Reports the first offending interval in day order, then list order.
    pub fn validate(&self) -> Result<()> {
        for (day, intervals) in &self.days {
            if let Some((index, iv)) = intervals
                .iter()
                .enumerate()
                .find(|(_, iv)| iv.is_degenerate())
            {
                return Err(ScheduleError::InvalidInterval {
                    day: *day,
                    index,
                    start: iv.start,
                    end: iv.end,
                });
            }
        }
        Ok(())
    }

    /// A copy with every degenerate interval removed. Days are kept even if
    /// they end up empty.
    pub fn without_degenerate(&self) -> Self {
        self.days
            .iter()
            .map(|(day, intervals)| {
                let kept = intervals.iter().filter(|iv| !iv.is_degenerate()).copied();
                (*day, kept.collect())
            })
            .collect()
    }
}

impl FromIterator<(Day, Vec<Interval>)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (Day, Vec<Interval>)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = (&'a Day, &'a Vec<Interval>);
    type IntoIter = btree_map::Iter<'a, Day, Vec<Interval>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
