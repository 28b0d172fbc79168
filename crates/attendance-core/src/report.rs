//! Attendance report rendering.
//!
//! Students are ordered by total minutes, highest first. The sort is stable,
//! so students with equal minutes keep the order they were given in, which
//! for [`Aggregator::students`](crate::Aggregator::students) is registration order.

use std::cmp::Reverse;

use serde::Serialize;

use crate::student::Student;

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub minutes: i64,
    pub days: usize,
}

impl ReportEntry {
    fn from_student(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            minutes: student.total_minutes(),
            days: student.total_days(),
        }
    }

    /// Renders the row as a report line.
    ///
    /// Students without attendance never show a day count.
    pub fn render(&self) -> String {
        if self.minutes == 0 {
            return format!("{}: 0 minutes", self.name);
        }
        let day_label = if self.days == 1 { "day" } else { "days" };
        format!(
            "{}: {} minutes in {} {day_label}",
            self.name, self.minutes, self.days
        )
    }
}

/// Computes report rows sorted by total minutes descending.
pub fn entries(students: &[Student]) -> Vec<ReportEntry> {
    let mut rows: Vec<_> = students.iter().map(ReportEntry::from_student).collect();
    rows.sort_by_key(|row| Reverse(row.minutes));
    rows
}

/// Formats the human-readable report: one line per student, no trailing newline.
pub fn generate(students: &[Student]) -> String {
    entries(students)
        .iter()
        .map(ReportEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the report as a pretty-printed JSON array, in report order.
pub fn generate_json(students: &[Student]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&entries(students))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use insta::assert_snapshot;

    use super::*;
    use crate::presence::PresenceRecord;
    use crate::types::StudentName;

    fn student(name: &str, presences: &[(i64, &str, &str)]) -> Student {
        let mut s = Student::new(StudentName::new(name).unwrap());
        for &(day, start, end) in presences {
            let record = PresenceRecord::new(
                day,
                NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
                NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
                "R100",
            )
            .unwrap();
            s.register_presence(record, 5);
        }
        s
    }

    #[test]
    fn test_report_sorted_and_formatted() {
        let students = vec![
            student("Fran", &[]),
            student("David", &[(3, "08:00", "08:30")]),
            student("Marco", &[(1, "09:00", "10:00"), (2, "11:00", "12:10")]),
        ];

        assert_snapshot!(generate(&students), @r"
        Marco: 130 minutes in 2 days
        David: 30 minutes in 1 day
        Fran: 0 minutes
        ");
    }

    #[test]
    fn test_report_empty_input() {
        assert_eq!(generate(&[]), "");
    }

    #[test]
    fn test_report_has_no_trailing_newline() {
        let report = generate(&[student("Marco", &[(1, "09:00", "09:10")])]);
        assert_eq!(report, "Marco: 10 minutes in 1 day");
    }

    #[test]
    fn test_zero_minutes_omits_days() {
        // A zero-length presence is accepted with a zero minimum but still
        // renders without a day clause.
        let mut s = Student::new(StudentName::new("Fran").unwrap());
        let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        s.register_presence(PresenceRecord::new(1, t, t, "R100").unwrap(), 0);
        assert_eq!(s.total_days(), 1);

        assert_eq!(generate(&[s]), "Fran: 0 minutes");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let students = vec![
            student("Zoe", &[(1, "09:00", "09:30")]),
            student("Adam", &[(2, "10:00", "10:30")]),
            student("Lena", &[(1, "09:00", "10:00")]),
            student("Bea", &[(4, "13:00", "13:30")]),
        ];

        let names: Vec<_> = entries(&students).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Lena", "Zoe", "Adam", "Bea"]);
    }

    #[test]
    fn test_plural_days_for_same_day_presences() {
        let students = vec![student(
            "Marco",
            &[(1, "09:00", "10:00"), (1, "14:00", "14:20"), (5, "08:00", "08:05")],
        )];
        assert_eq!(generate(&students), "Marco: 85 minutes in 2 days");
    }

    #[test]
    fn test_report_json_output() {
        let students = vec![
            student("David", &[(3, "08:00", "08:30")]),
            student("Marco", &[(1, "09:00", "10:00"), (2, "11:00", "12:10")]),
        ];

        let json = generate_json(&students).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"name": "Marco", "minutes": 130, "days": 2},
                {"name": "David", "minutes": 30, "days": 1},
            ])
        );
    }
}
