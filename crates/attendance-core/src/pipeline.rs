//! Pipeline orchestration.
//!
//! Feeds parsed events through an [`Aggregator`] in input order and renders
//! the final report.
//!
//! Pipeline stages:
//! 1. [`event::parse`] - text lines to events, malformed lines skipped
//! 2. time conversion - `HH:MM` strings to [`NaiveTime`], per event
//! 3. [`Aggregator`] - registration and the minimum duration rule
//! 4. [`report`] - sorting and rendering
//!
//! No single event can stop the run. Every skipped event is recorded in the
//! [`BatchSummary`] together with its reason.

use chrono::NaiveTime;
use thiserror::Error;

use crate::aggregator::{Aggregator, AttendanceConfig};
use crate::event::{self, Event, LineEvent, ParseError};
use crate::outcome::{PresenceOutcome, RejectReason, StudentOutcome};
use crate::report;

const TIME_FORMAT: &str = "%H:%M";

/// Why an event did not contribute to the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Malformed(#[from] ParseError),

    #[error("invalid time '{value}', expected HH:MM: {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Rejected(#[from] RejectReason),
}

/// An event that was skipped, with the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    pub line: usize,
    pub reason: SkipReason,
}

/// Per-run tally of processed and skipped events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Events that were applied, including idempotent re-registrations.
    pub applied: usize,
    pub skipped: Vec<SkippedEvent>,
}

impl BatchSummary {
    fn skip(&mut self, line: usize, reason: impl Into<SkipReason>) {
        self.skipped.push(SkippedEvent {
            line,
            reason: reason.into(),
        });
    }
}

/// Report rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything produced by a run.
#[derive(Debug)]
pub struct RunOutput {
    pub report: String,
    pub summary: BatchSummary,
}

fn parse_time(value: &str) -> Result<NaiveTime, SkipReason> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|source| SkipReason::InvalidTime {
        value: value.to_string(),
        source,
    })
}

/// Applies a single event to the aggregator.
pub fn apply_event(aggregator: &mut Aggregator, event: &Event) -> Result<(), SkipReason> {
    match event {
        Event::Student { name } => match aggregator.register_student(name) {
            StudentOutcome::Registered | StudentOutcome::AlreadyRegistered => Ok(()),
            StudentOutcome::Rejected(reason) => Err(reason.into()),
        },
        Event::Presence {
            name,
            day,
            start,
            end,
            room,
        } => {
            let start = parse_time(start)?;
            let end = parse_time(end)?;
            match aggregator.register_presence(name, *day, start, end, room) {
                PresenceOutcome::Accepted { .. } => Ok(()),
                PresenceOutcome::Rejected(reason) => Err(reason.into()),
            }
        }
    }
}

/// Applies events in order, isolating failures per event.
pub fn process_events(aggregator: &mut Aggregator, events: &[LineEvent]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for LineEvent { line, event } in events {
        match apply_event(aggregator, event) {
            Ok(()) => summary.applied += 1,
            Err(reason) => {
                if matches!(reason, SkipReason::InvalidTime { .. }) {
                    tracing::error!(line, ?event, error = %reason, "error processing event");
                }
                summary.skip(*line, reason);
            }
        }
    }

    tracing::debug!(
        applied = summary.applied,
        skipped = summary.skipped.len(),
        "events processed"
    );
    summary
}

/// Renders the report for the aggregator's students.
///
/// A rendering failure is logged and yields an empty report so callers
/// always have something to display.
pub fn render(aggregator: &Aggregator, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => report::generate(aggregator.students()),
        ReportFormat::Json => report::generate_json(aggregator.students()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "error generating final report");
            String::new()
        }),
    }
}

/// Parses `input`, aggregates it and renders the report.
pub fn run(input: &str, config: AttendanceConfig, format: ReportFormat) -> RunOutput {
    let parsed = event::parse(input);
    let mut aggregator = Aggregator::new(config);

    let mut summary = process_events(&mut aggregator, &parsed.events);
    for err in parsed.errors {
        summary.skip(err.line, err.error);
    }
    summary.skipped.sort_by_key(|s| s.line);

    RunOutput {
        report: render(&aggregator, format),
        summary,
    }
}
