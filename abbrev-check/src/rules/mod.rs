//! Per-file quality rules.
//!
//! - `encoding` — whole-file UTF-8 decoding (runs on raw bytes)
//! - `escape` — backslash sequences outside the accepted set
//! - `starting_letter` — abbreviation must start like the first significant word
//! - `duplicates` — repeated full names or abbreviations within one file
//! - `identity` — multi-word abbreviation identical to its full name
//! - `outdated` — `Manage.` used without `Manag.`
//!
//! Every rule only appends to the [`RunReport`]; none of them can fail.

pub mod duplicates;
pub mod encoding;
pub mod escape;
pub mod identity;
pub mod outdated;
pub mod starting_letter;

use std::path::Path;

use tracing::debug;

use crate::report::RunReport;
use crate::source::CsvSource;

/// Run every rule against one file's bytes.
///
/// Row rules only run when the bytes decode as UTF-8; otherwise the file
/// contributes exactly one `NonUtf8` finding.
pub fn check_file(path: &Path, bytes: &[u8], report: &mut RunReport) {
    let before = report.total();

    if let Some(text) = encoding::check(path, bytes, report) {
        let source = CsvSource::new(path, text);
        escape::check(&source, report);
        starting_letter::check(&source, report);
        duplicates::check(&source, report);
        identity::check(&source, report);
        outdated::check(&source, report);
    }

    debug!(
        file = %path.display(),
        findings = report.total() - before,
        "Checked file"
    );
}
