//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// One status line per document, then every finding as one printed line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  DOCUMENTATION CONSISTENCY CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Found {} documentation files", report.files_attempted())?;
    writeln!(writer)?;

    for status in &report.documents {
        if status.findings == 0 {
            writeln!(writer, "  {} ... ok", status.path.display())?;
        } else {
            writeln!(
                writer,
                "  {} ... {} error(s)",
                status.path.display(),
                status.findings
            )?;
        }
    }
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:  {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer, "  Findings:       {}", report.findings_count())?;
    writeln!(writer)?;

    if !report.findings.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FINDINGS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for finding in &report.findings {
            writeln!(writer, "  - {}", finding.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} documentation files are valid",
            report.scanned_files
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} Found {} validation finding(s)",
            report.findings_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
