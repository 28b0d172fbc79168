//! Core domain logic for student attendance.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing: turning `Student`/`Presence` lines into events
//! - Aggregation: the student registry and the minimum presence duration rule
//! - Reporting: sorting students by attendance and rendering the report

pub mod aggregator;
pub mod event;
mod outcome;
pub mod pipeline;
mod presence;
pub mod report;
mod student;
pub mod types;

pub use aggregator::{Aggregator, AttendanceConfig, MIN_PRESENCE_DURATION};
pub use event::{Event, LineEvent, ParseError, ParsedInput};
pub use outcome::{PresenceOutcome, RejectReason, StudentOutcome};
pub use pipeline::{BatchSummary, ReportFormat, RunOutput, SkipReason, SkippedEvent, run};
pub use presence::PresenceRecord;
pub use student::Student;
pub use types::{RoomCode, StudentName, ValidationError};
