//! Explicit results for registration attempts.
//!
//! Domain rejections are expected and never abort a run, so they are
//! returned as values rather than errors.

use thiserror::Error;

use crate::types::ValidationError;

/// Why an event left no trace in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Student registration with an empty name.
    #[error("student name is empty")]
    EmptyName,

    /// Presence for a name that was never registered.
    #[error("student '{name}' is not registered")]
    UnknownStudent { name: String },

    /// Presence shorter than the configured minimum.
    #[error(
        "presence of {minutes} {unit} is shorter than the {minimum} minute minimum",
        unit = minute_unit(.minutes)
    )]
    TooShort { minutes: i64, minimum: i64 },

    /// The presence record could not be constructed.
    #[error("invalid presence: {0}")]
    Invalid(#[from] ValidationError),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn minute_unit(minutes: &i64) -> &'static str {
    if *minutes == 1 { "minute" } else { "minutes" }
}

/// Result of registering a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentOutcome {
    Registered,
    /// The name was already known; its history is untouched.
    AlreadyRegistered,
    Rejected(RejectReason),
}

/// Result of registering a presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceOutcome {
    Accepted { minutes: i64 },
    Rejected(RejectReason),
}

impl PresenceOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
