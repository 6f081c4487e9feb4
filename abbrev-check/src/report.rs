//! Run report: the accumulator every check writes into.

use serde::Serialize;

use crate::error::ScanError;
use crate::finding::{Finding, FindingKind, Severity};

/// Result of a quality-check run.
///
/// Created empty at the start of a run, passed by `&mut` through every check,
/// then rendered once. Counts are always derived from the stored findings.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct RunReport {
    /// Number of CSV files that were read and checked.
    pub files_checked: usize,
    /// Findings in the order they were recorded.
    findings: Vec<Finding>,
    /// Files that could not be read at all.
    /// Non-empty means the run did not cover the directory: treat it as a
    /// failure regardless of the findings.
    pub scan_errors: Vec<ScanError>,
}

impl RunReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Record a finding of `kind` with the given message body.
    pub fn record(&mut self, kind: FindingKind, detail: &str) {
        self.push(Finding::new(kind, detail));
    }

    pub fn push_scan_error(&mut self, error: ScanError) {
        self.scan_errors.push(error);
    }

    /// All findings, in recording order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one kind, in recording order.
    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings_of(kind).count()
    }

    /// Sum of all finding counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.severity_count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.severity_count(Severity::Warn)
    }

    /// True when any ERROR-severity finding was recorded; drives the exit code.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// True when every file was checked and no ERROR finding was recorded.
    #[must_use]
    pub fn ok(&self) -> bool {
        !self.has_errors() && self.scan_errors.is_empty()
    }

    fn severity_count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = RunReport::new();
        assert_eq!(report.total(), 0);
        assert!(!report.has_errors());
        for kind in FindingKind::ALL {
            assert_eq!(report.count(kind), 0);
        }
    }

    #[test]
    fn test_counts_track_findings() {
        let mut report = RunReport::new();
        report.record(FindingKind::WrongEscape, "a");
        report.record(FindingKind::DuplicateFullNameOrAbbrev, "b");
        report.record(FindingKind::WrongEscape, "c");

        assert_eq!(report.count(FindingKind::WrongEscape), 2);
        assert_eq!(report.count(FindingKind::DuplicateFullNameOrAbbrev), 1);
        assert_eq!(report.total(), 3);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 1);

        let messages: Vec<&str> = report
            .findings_of(FindingKind::WrongEscape)
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(messages, vec!["ERROR: a", "ERROR: c"]);
    }

    #[test]
    fn test_warnings_alone_do_not_fail() {
        let mut report = RunReport::new();
        report.record(FindingKind::OutdatedManageAbbreviation, "x");
        report.record(FindingKind::IdenticalAbbrevAndFullName, "y");
        assert!(!report.has_errors());

        report.record(FindingKind::NonUtf8, "z");
        assert!(report.has_errors());
        assert!(!report.ok());
    }

    #[test]
    fn test_scan_error_fails_run() {
        let mut report = RunReport::new();
        assert!(report.ok());

        report.push_scan_error(ScanError::new(
            std::path::PathBuf::from("journals/locked.csv"),
            crate::error::ScanErrorKind::IoError,
            "Failed to open file: permission denied".to_owned(),
        ));
        assert!(!report.has_errors());
        assert!(!report.ok());
    }
}
