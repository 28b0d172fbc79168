//! Raw input events and the line parser that produces them.
//!
//! Input is one command per line, whitespace delimited:
//!
//! ```text
//! Student Marco
//! Presence Marco 1 09:00 10:00 R100
//! ```
//!
//! The parser checks structure only. Times stay as strings until the
//! pipeline converts them, and no business rule is applied here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Adds a student to the roster.
    Student { name: String },
    /// A sighting of a student in a room.
    Presence {
        name: String,
        day: i64,
        /// `HH:MM`, 24-hour.
        start: String,
        /// `HH:MM`, 24-hour.
        end: String,
        room: String,
    },
}

/// An event tagged with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    pub line: usize,
    pub event: Event,
}

/// Why a line could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing information: {0}")]
    MissingField(&'static str),

    #[error("day must be an integer 1-7, got '{0}'")]
    InvalidDay(String),
}

/// A line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub text: String,
    pub error: ParseError,
}

/// Result of parsing a whole input.
#[derive(Debug, Default)]
pub struct ParsedInput {
    pub events: Vec<LineEvent>,
    pub errors: Vec<LineError>,
}

/// Parses a single line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Event>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Ok(None);
    };

    match command {
        "Student" => {
            let name = parts.get(1).ok_or(ParseError::MissingField("student name"))?;
            Ok(Some(Event::Student {
                name: (*name).to_string(),
            }))
        }
        "Presence" => {
            if parts.len() < 6 {
                return Err(ParseError::MissingField("incomplete presence record"));
            }
            let day = parts[2]
                .parse()
                .map_err(|_| ParseError::InvalidDay(parts[2].to_string()))?;
            Ok(Some(Event::Presence {
                name: parts[1].to_string(),
                day,
                start: parts[3].to_string(),
                end: parts[4].to_string(),
                room: parts[5].to_string(),
            }))
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parses every line of `input`, skipping malformed ones.
///
/// Skipped lines are logged and returned in [`ParsedInput::errors`].
pub fn parse(input: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (idx, text) in input.lines().enumerate() {
        let line = idx + 1;
        match parse_line(text) {
            Ok(Some(event)) => parsed.events.push(LineEvent { line, event }),
            Ok(None) => {}
            Err(error) => {
                let text = text.trim().to_string();
                if matches!(error, ParseError::UnknownCommand(_)) {
                    tracing::warn!(line, %error, "line ignored");
                } else {
                    tracing::error!(line, %error, text = %text, "malformed line skipped");
                }
                parsed.errors.push(LineError { line, text, error });
            }
        }
    }

    parsed
}
