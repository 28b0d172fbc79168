//! Check command for auditing which events did not count.

use std::io::Write;

use anyhow::Result;
use attendance_core::{AttendanceConfig, ReportFormat};

/// Runs the check command, writing the batch summary.
pub fn run<W: Write>(writer: &mut W, input: &str, config: AttendanceConfig) -> Result<()> {
    let summary = attendance_core::run(input, config, ReportFormat::Text).summary;

    writeln!(writer, "Applied: {}", summary.applied)?;
    writeln!(writer, "Skipped: {}", summary.skipped.len())?;
    for skipped in &summary.skipped {
        writeln!(writer, "  line {}: {}", skipped.line, skipped.reason)?;
    }

    Ok(())
}
