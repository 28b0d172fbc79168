//! Per-student attendance accumulator.

use std::collections::HashSet;

use crate::outcome::{PresenceOutcome, RejectReason};
use crate::presence::PresenceRecord;
use crate::types::StudentName;

/// A registered student and their accepted presences.
///
/// Only presences meeting the minimum duration are ever stored, so every
/// total is computed over valid attendance only.
#[derive(Debug, Clone)]
pub struct Student {
    name: StudentName,
    presences: Vec<PresenceRecord>,
}

impl Student {
    pub const fn new(name: StudentName) -> Self {
        Self {
            name,
            presences: Vec::new(),
        }
    }

    pub const fn name(&self) -> &StudentName {
        &self.name
    }

    /// Accepted presences in the order they were registered.
    pub fn presences(&self) -> &[PresenceRecord] {
        &self.presences
    }

    /// Stores `record` if it lasts at least `min_minutes`.
    ///
    /// Short records are dropped without logging; the outcome says why.
    pub fn register_presence(
        &mut self,
        record: PresenceRecord,
        min_minutes: i64,
    ) -> PresenceOutcome {
        let minutes = record.duration_minutes();
        if minutes < min_minutes {
            return PresenceOutcome::Rejected(RejectReason::TooShort {
                minutes,
                minimum: min_minutes,
            });
        }
        self.presences.push(record);
        PresenceOutcome::Accepted { minutes }
    }

    /// Sum of accepted presence durations.
    pub fn total_minutes(&self) -> i64 {
        self.presences.iter().map(PresenceRecord::duration_minutes).sum()
    }

    /// Number of distinct days with at least one accepted presence.
    pub fn total_days(&self) -> usize {
        self.presences
            .iter()
            .map(PresenceRecord::day)
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    const MIN: i64 = 5;

    fn record(day: i64, start: (u32, u32), end: (u32, u32)) -> PresenceRecord {
        PresenceRecord::new(
            day,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            "R100",
        )
        .unwrap()
    }

    fn student() -> Student {
        Student::new(StudentName::new("Marco").unwrap())
    }

    #[test]
    fn new_student_has_no_attendance() {
        let s = student();
        assert_eq!(s.total_minutes(), 0);
        assert_eq!(s.total_days(), 0);
    }

    #[test]
    fn accepts_presence_at_minimum() {
        let mut s = student();
        let outcome = s.register_presence(record(1, (9, 0), (9, 5)), MIN);
        assert_eq!(outcome, PresenceOutcome::Accepted { minutes: 5 });
        assert_eq!(s.total_minutes(), 5);
    }

    #[test]
    fn rejects_presence_one_minute_short() {
        let mut s = student();
        let outcome = s.register_presence(record(1, (9, 0), (9, 4)), MIN);
        assert_eq!(
            outcome,
            PresenceOutcome::Rejected(RejectReason::TooShort {
                minutes: 4,
                minimum: 5
            })
        );
        assert!(s.presences().is_empty());
    }

    #[test]
    fn rejected_presence_does_not_affect_totals() {
        let mut s = student();
        s.register_presence(record(1, (9, 0), (10, 0)), MIN);
        s.register_presence(record(2, (11, 0), (11, 3)), MIN);
        s.register_presence(record(3, (12, 0), (11, 0)), MIN);

        assert_eq!(s.total_minutes(), 60);
        assert_eq!(s.total_days(), 1);
    }

    #[test]
    fn same_day_counts_once() {
        let mut s = student();
        s.register_presence(record(1, (9, 0), (10, 0)), MIN);
        s.register_presence(record(1, (11, 0), (11, 30)), MIN);
        s.register_presence(record(2, (8, 0), (8, 10)), MIN);

        assert_eq!(s.total_minutes(), 100);
        assert_eq!(s.total_days(), 2);
    }

    #[test]
    fn zero_minimum_accepts_zero_length_presence() {
        let mut s = student();
        let outcome = s.register_presence(record(4, (9, 0), (9, 0)), 0);
        assert!(outcome.is_accepted());
        assert_eq!(s.total_minutes(), 0);
        assert_eq!(s.total_days(), 1);
    }
}
