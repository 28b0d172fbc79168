//! Report command for printing the attendance report.

use std::io::Write;

use anyhow::Result;
use attendance_core::{AttendanceConfig, ReportFormat};

/// Runs the report command, writing the report followed by a newline.
pub fn run<W: Write>(
    writer: &mut W,
    input: &str,
    config: AttendanceConfig,
    json: bool,
) -> Result<()> {
    let format = if json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let output = attendance_core::run(input, config, format);
    tracing::debug!(
        applied = output.summary.applied,
        skipped = output.summary.skipped.len(),
        "report generated"
    );

    writeln!(writer, "{}", output.report)?;
    Ok(())
}
