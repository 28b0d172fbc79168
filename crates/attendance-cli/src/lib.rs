//! Attendance CLI library.
//!
//! This crate provides the CLI interface for the attendance reporter.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, InputArgs};
pub use config::Config;
