//! # overlap-engine
//!
//! Common free time across participants' weekly availability.
//!
//! Each participant has a [`DaySchedule`]: days of the week mapped to half-open
//! [`Interval`]s. The engine intersects any number of them, day by day, and
//! returns the windows in which everyone is free. A day missing from any
//! participant is dropped, unless [`MissingDayPolicy::Carry`] is asked for.
//!
//! ```rust
//! use overlap_engine::{intersect_all, Day, DaySchedule, Interval};
//!
//! let alice = DaySchedule::new().with_day(Day::Monday, vec![Interval { start: 9, end: 17 }]);
//! let bob = DaySchedule::new().with_day(Day::Monday, vec![Interval { start: 13, end: 20 }]);
//!
//! let common = intersect_all(&[alice, bob]);
//! assert_eq!(common.get(Day::Monday), Some(&[Interval { start: 13, end: 17 }][..]));
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` and pairwise overlap
//! - [`schedule`] — `Day`, `DaySchedule`, validation
//! - [`overlap`] — per-day, per-schedule and N-way intersection
//! - [`codec`] — JSON decode/encode with validation
//! - [`store`] — `ScheduleStore` trait, in-memory and directory stores
//! - [`query`] — common availability of stored participants
//! - [`error`] — Error types

pub mod codec;
pub mod error;
pub mod interval;
pub mod overlap;
pub mod query;
pub mod schedule;
pub mod store;

pub use codec::{decode_schedule, decode_schedules, encode_schedule};
pub use error::ScheduleError;
pub use interval::{intersect_pair, Interval};
pub use overlap::{
    intersect_all, intersect_all_with, intersect_day_lists, intersect_schedules,
    intersect_schedules_with, MissingDayPolicy,
};
pub use query::common_availability;
pub use schedule::{Day, DaySchedule};
pub use store::{DirectoryStore, MemoryStore, ParticipantId, ScheduleStore};
