//! JSON boundary for stored availability blobs.
//!
//! Shape errors (unknown day names, non-numeric bounds, missing fields) surface
//! as [`ScheduleError::Json`]; intervals with `start >= end` surface as
//! [`ScheduleError::InvalidInterval`]. Anything that decodes here is safe to
//! hand to the intersection functions.

use crate::error::Result;
use crate::schedule::DaySchedule;

/// Decode and validate one schedule, e.g.
/// `{"Monday":[{"start":540,"end":1020}]}`.
pub fn decode_schedule(json: &str) -> Result<DaySchedule> {
    let schedule: DaySchedule = serde_json::from_str(json)?;
    schedule.validate()?;
    Ok(schedule)
}

/// Decode and validate a JSON array of schedules.
pub fn decode_schedules(json: &str) -> Result<Vec<DaySchedule>> {
    let schedules: Vec<DaySchedule> = serde_json::from_str(json)?;
    for schedule in &schedules {
        schedule.validate()?;
    }
    Ok(schedules)
}

/// Encode a schedule as compact JSON.
pub fn encode_schedule(schedule: &DaySchedule) -> Result<String> {
    Ok(serde_json::to_string(schedule)?)
}

/// Encode a schedule as indented JSON.
pub fn encode_schedule_pretty(schedule: &DaySchedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
