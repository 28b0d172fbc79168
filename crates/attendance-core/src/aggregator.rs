//! Student registry and presence registration.
//!
//! The aggregator owns every [`Student`] for a single report run. It is
//! constructed explicitly and passed by reference; it does no locking.

use std::collections::HashMap;

use chrono::NaiveTime;
use crate::outcome::{PresenceOutcome, RejectReason, StudentOutcome};
use crate::presence::PresenceRecord;
use crate::student::Student;
use crate::types::{StudentName, ValidationError};

/// Default minimum presence duration in minutes.
pub const MIN_PRESENCE_DURATION: i64 = 5;

/// Configuration for attendance aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceConfig {
    /// Presences shorter than this many minutes are ignored.
    /// Default: 5. Never negative.
    min_presence_minutes: i64,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            min_presence_minutes: MIN_PRESENCE_DURATION,
        }
    }
}

impl AttendanceConfig {
    /// Creates a configuration with the given minimum.
    ///
    /// A negative minimum would let reversed presences (end before start)
    /// through, so it is rejected.
    pub const fn new(min_presence_minutes: i64) -> Result<Self, ValidationError> {
        if min_presence_minutes < 0 {
            return Err(ValidationError::Negative {
                field: "minimum presence duration",
                value: min_presence_minutes,
            });
        }
        Ok(Self {
            min_presence_minutes,
        })
    }

    pub const fn min_presence_minutes(&self) -> i64 {
        self.min_presence_minutes
    }
}

/// Registry of students, iterated in registration order.
#[derive(Debug, Default)]
pub struct Aggregator {
    config: AttendanceConfig,
    students: Vec<Student>,
    index: HashMap<StudentName, usize>,
}

impl Aggregator {
    pub fn new(config: AttendanceConfig) -> Self {
        Self {
            config,
            students: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub const fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Registers a student. Re-registering a known name keeps its history.
    pub fn register_student(&mut self, name: &str) -> StudentOutcome {
        let Ok(name) = StudentName::new(name) else {
            tracing::warn!("attempted to register student with empty name");
            return StudentOutcome::Rejected(RejectReason::EmptyName);
        };

        if self.index.contains_key(&name) {
            return StudentOutcome::AlreadyRegistered;
        }

        tracing::info!(student = %name, "student registered");
        self.index.insert(name.clone(), self.students.len());
        self.students.push(Student::new(name));
        StudentOutcome::Registered
    }

    /// Registers a presence for an already registered student.
    ///
    /// Unknown students and invalid records are logged and rejected; neither
    /// stops the caller from processing further events.
    pub fn register_presence(
        &mut self,
        name: &str,
        day: i64,
        start: NaiveTime,
        end: NaiveTime,
        room: &str,
    ) -> PresenceOutcome {
        let Some(&idx) = self.index.get(name) else {
            tracing::warn!(student = name, "presence ignored for unregistered student");
            return PresenceOutcome::Rejected(RejectReason::UnknownStudent {
                name: name.to_string(),
            });
        };

        let record = match PresenceRecord::new(day, start, end, room) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(student = name, error = %e, "error registering presence");
                return PresenceOutcome::Rejected(e.into());
            }
        };

        self.students[idx].register_presence(record, self.config.min_presence_minutes)
    }

    /// All students in registration order. This is not the report order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, name: &str) -> Option<&Student> {
        self.index.get(name).map(|&idx| &self.students[idx])
    }
}
