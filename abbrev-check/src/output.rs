//! Report rendering.
//!
//! The text summary has a fixed layout consumed by people and CI logs; the
//! JSON form carries the same data for tooling.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{CheckError, ScanError};
use crate::finding::{Finding, FindingKind};
use crate::report::RunReport;

/// Write the fixed-format text summary.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
    let total = report.total();
    writeln!(writer, "Total vulnerabilities: {total}")?;
    for kind in FindingKind::ALL {
        writeln!(writer, "{}: {}", kind.label(), report.count(kind))?;
    }

    writeln!(writer)?;
    if total == 0 {
        writeln!(writer, "Quality check completed with no errors or warnings.")?;
        return Ok(());
    }

    writeln!(writer, "Quality Check Summary:")?;
    for kind in FindingKind::ALL {
        let count = report.count(kind);
        if count == 0 {
            continue;
        }
        writeln!(writer)?;
        writeln!(writer, "{}: with {count} instances", kind.label())?;
        for finding in report.findings_of(kind) {
            writeln!(writer, "{}", finding.message)?;
        }
    }
    Ok(())
}

/// Render the summary to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the file cannot be created or written.
pub fn write_summary_file(report: &RunReport, path: &Path) -> Result<(), CheckError> {
    let mut rendered = Vec::new();
    let io_err = |source: std::io::Error| CheckError::Io {
        path: path.to_owned(),
        source,
    };
    write_summary(report, &mut rendered).map_err(io_err)?;
    std::fs::write(path, rendered).map_err(io_err)
}

#[derive(Serialize)]
struct KindCount {
    kind: FindingKind,
    label: String,
    count: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    ok: bool,
    has_errors: bool,
    files_checked: usize,
    counts: Vec<KindCount>,
    findings: &'a [Finding],
    scan_errors: &'a [ScanError],
}

/// Format a `RunReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &RunReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let view = JsonReport {
        total: report.total(),
        ok: report.ok(),
        has_errors: report.has_errors(),
        files_checked: report.files_checked,
        counts: FindingKind::ALL
            .into_iter()
            .map(|kind| KindCount {
                kind,
                label: kind.label(),
                count: report.count(kind),
            })
            .collect(),
        findings: report.findings(),
        scan_errors: &report.scan_errors,
    };
    let json = serde_json::to_string_pretty(&view)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
