//! # abbrev-check
//!
//! Quality checks for journal abbreviation lists stored as CSV files.
//!
//! Each `*.csv` file in a directory is checked by six independent rules. Three
//! of them report errors (bad escape sequences, abbreviations starting with
//! the wrong letter, non-UTF-8 content) and three report warnings (duplicate
//! entries, abbreviations identical to the full name, the outdated `Manage.`
//! token). All findings are collected in a [`RunReport`] that renders to a
//! fixed-format text summary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use abbrev_check::{CheckConfig, check_journals, output};
//!
//! let config = CheckConfig::new("journals");
//! let report = check_journals(&config).unwrap();
//! output::write_summary_file(&report, Path::new("check_quality_summary.txt")).unwrap();
//! println!("Errors: {}", report.error_count());
//! ```

mod config;
mod error;
mod finding;
pub mod output;
mod report;
pub mod rules;
mod source;
mod strategy;

pub use config::{CheckConfig, DEFAULT_JOURNALS_DIR, DEFAULT_SUMMARY_FILE};
pub use error::{CheckError, ScanError, ScanErrorKind};
pub use finding::{Finding, FindingKind, Severity};
pub use report::RunReport;
pub use rules::check_file;
pub use source::{CsvSource, Entry, Row};

use strategy::fs::{ScanResult, find_csv_files, read_file_bounded};
use tracing::{info, warn};

/// Check every CSV file directly inside `config.journals_dir`.
///
/// This is the primary public API.
///
/// # Errors
///
/// Returns [`CheckError::DirectoryNotFound`] if the directory does not exist;
/// no file is read in that case. Files that cannot be read are recorded in
/// `report.scan_errors`; the remaining files are still checked, but the
/// report is no longer [`RunReport::ok`].
pub fn check_journals(config: &CheckConfig) -> Result<RunReport, CheckError> {
    let dir = &config.journals_dir;
    if !dir.is_dir() {
        return Err(CheckError::DirectoryNotFound { path: dir.clone() });
    }

    let (files, scan_errors) = find_csv_files(dir);
    let mut report = RunReport::new();
    for scan_err in scan_errors {
        warn!("{}", scan_err.format_human_readable());
        report.push_scan_error(scan_err);
    }

    for file_path in &files {
        let bytes = match read_file_bounded(file_path, config.max_file_size) {
            ScanResult::Ok(bytes) => bytes,
            ScanResult::Err(scan_err) => {
                warn!("{}", scan_err.format_human_readable());
                report.push_scan_error(scan_err);
                continue;
            }
        };

        check_file(file_path, &bytes, &mut report);
        report.files_checked += 1;
    }

    info!(
        files = report.files_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        scan_errors = report.scan_errors.len(),
        "Quality check finished"
    );
    Ok(report)
}
