//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Student attendance reports.
///
/// Reads `Student` and `Presence` lines and reports each student's total
/// attendance, most minutes first.
#[derive(Debug, Parser)]
#[command(name = "attendance", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `report` on stdin.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the attendance report.
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the events that did not count toward the report, and why.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Input options shared by all subcommands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Event file to read. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Minimum presence duration in minutes (overrides config).
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(i64).range(0..))]
    pub min_duration: Option<i64>,
}
