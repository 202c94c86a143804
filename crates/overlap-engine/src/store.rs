//! Where participants' schedules live between requests.
//!
//! The engine only needs two things from persistence: fetch the schedules of a
//! set of participants, and replace one participant's schedule. [`ScheduleStore`]
//! is that seam. [`MemoryStore`] backs tests and embedders, [`DirectoryStore`]
//! keeps one JSON blob per participant on disk.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::codec::{decode_schedule, encode_schedule_pretty};
use crate::error::{Result, ScheduleError};
use crate::schedule::DaySchedule;

/// Opaque participant identifier, typically an email address or user id.
///
/// Restricted to ASCII letters, digits and `._@+-`, and may not start with a
/// dot, so it can double as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let allowed = |c: char| c.is_ascii_alphanumeric() || "._@+-".contains(c);
        if id.is_empty() || id.starts_with('.') || !id.chars().all(allowed) {
            return Err(ScheduleError::InvalidParticipant(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

/// Persistence for per-participant availability.
pub trait ScheduleStore {
    /// The stored schedule, or `None` if the participant has never saved one.
    fn get(&self, id: &ParticipantId) -> Result<Option<DaySchedule>>;

    /// Replace the participant's schedule.
    fn put(&self, id: &ParticipantId, schedule: &DaySchedule) -> Result<()>;

    /// Schedules of every participant in `ids` that has one, in order of first
    /// mention. Repeated ids count once; unknown participants are skipped
    /// rather than treated as an error.
    fn get_many(&self, ids: &[ParticipantId]) -> Result<Vec<DaySchedule>> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut found = Vec::with_capacity(ids.len());
        for id in ids.iter().filter(|id| seen.insert(*id)) {
            match self.get(id)? {
                Some(schedule) => found.push(schedule),
                None => trace!(participant = %id, "no stored schedule, skipping"),
            }
        }
        Ok(found)
    }
}

/// In-process store; cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schedules: RwLock<HashMap<ParticipantId, DaySchedule>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.schedules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScheduleStore for MemoryStore {
    fn get(&self, id: &ParticipantId) -> Result<Option<DaySchedule>> {
        let schedules = self.schedules.read().unwrap_or_else(PoisonError::into_inner);
        Ok(schedules.get(id).cloned())
    }

    fn put(&self, id: &ParticipantId, schedule: &DaySchedule) -> Result<()> {
        schedule.validate()?;
        let mut schedules = self.schedules.write().unwrap_or_else(PoisonError::into_inner);
        schedules.insert(id.clone(), schedule.clone());
        debug!(participant = %id, days = schedule.len(), "stored schedule in memory");
        Ok(())
    }
}

/// One `<participant>.json` file per participant under a root directory.
///
/// Blobs are validated on the way in and on the way out. Each write goes
/// through its own temporary file in the store directory and is renamed into
/// place, so readers never see a half-written blob even with concurrent
/// writers; the last rename wins.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// The directory is created lazily on the first `put`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &ParticipantId) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ScheduleError {
    ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ScheduleStore for DirectoryStore {
    fn get(&self, id: &ParticipantId) -> Result<Option<DaySchedule>> {
        let path = self.path_for(id);
        let blob = match fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };
        let schedule = decode_schedule(&blob)?;
        debug!(participant = %id, path = %path.display(), "loaded schedule");
        Ok(Some(schedule))
    }

    fn put(&self, id: &ParticipantId, schedule: &DaySchedule) -> Result<()> {
        schedule.validate()?;
        fs::create_dir_all(&self.root).map_err(|e| io_error(&self.root, e))?;

        let path = self.path_for(id);
        let blob = encode_schedule_pretty(schedule)?;

        // Unique per writer, same directory so the final rename stays atomic.
        // Dropped without persisting, the temp file removes itself.
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| io_error(&self.root, e))?;
        tmp.write_all(blob.as_bytes())
            .map_err(|e| io_error(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| io_error(&path, e.error))?;

        debug!(participant = %id, path = %path.display(), "wrote schedule");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_ids_accept_emails() {
        assert!(ParticipantId::new("alice+work@example.com").is_ok());
        assert!(ParticipantId::new("user-42_b").is_ok());
    }

    #[test]
    fn participant_ids_reject_paths_and_blanks() {
        for bad in ["", "../etc/passwd", "a/b", ".hidden", "a b", "a\\b"] {
            assert!(
                matches!(ParticipantId::new(bad), Err(ScheduleError::InvalidParticipant(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn participant_id_deserializes_with_validation() {
        let ok: ParticipantId = serde_json::from_str("\"bob@example.com\"").unwrap();
        assert_eq!(ok.as_str(), "bob@example.com");
        assert!(serde_json::from_str::<ParticipantId>("\"../x\"").is_err());
    }
}
