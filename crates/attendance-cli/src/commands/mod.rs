//! CLI subcommand implementations.

pub mod check;
pub mod report;
pub mod util;
