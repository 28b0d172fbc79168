//! Room presence sightings.

use chrono::NaiveTime;

use crate::types::{RoomCode, ValidationError};

/// A single sighting of a student in a room during a time window.
///
/// Records are immutable once constructed. `end` is not required to come
/// after `start`: such a record has a non-positive duration and is rejected
/// by the minimum duration rule instead of at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceRecord {
    day: i64,
    start: NaiveTime,
    end: NaiveTime,
    room: RoomCode,
}

impl PresenceRecord {
    /// Creates a new presence record.
    ///
    /// `day` is nominally 1-7 but any integer is accepted. The only
    /// construction failure is an empty room.
    pub fn new(
        day: i64,
        start: NaiveTime,
        end: NaiveTime,
        room: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            day,
            start,
            end,
            room: RoomCode::new(room)?,
        })
    }

    /// Whole minutes between `start` and `end`, rounded toward negative infinity.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_seconds().div_euclid(60)
    }

    pub const fn day(&self) -> i64 {
        self.day
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    pub const fn room(&self) -> &RoomCode {
        &self.room
    }
}
