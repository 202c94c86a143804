//! "When are all of these people free?" against a [`ScheduleStore`].

use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::overlap::{intersect_all_with, MissingDayPolicy};
use crate::schedule::DaySchedule;
use crate::store::{ParticipantId, ScheduleStore};

/// Fetch every listed participant's schedule and intersect them.
///
/// Participants without a stored schedule are left out of the intersection.
/// If none of them has one, the result is [`ScheduleError::NoParticipants`]
/// rather than an empty schedule, so callers can tell "nobody found" from
/// "nobody overlaps".
pub fn common_availability<S>(
    store: &S,
    ids: &[ParticipantId],
    policy: MissingDayPolicy,
) -> Result<DaySchedule>
where
    S: ScheduleStore + ?Sized,
{
    let schedules = store.get_many(ids)?;
    if schedules.is_empty() {
        return Err(ScheduleError::NoParticipants);
    }

    debug!(
        requested = ids.len(),
        found = schedules.len(),
        %policy,
        "intersecting stored schedules"
    );
    Ok(intersect_all_with(&schedules, policy))
}
