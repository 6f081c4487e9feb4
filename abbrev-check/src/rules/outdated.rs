//! `Manage.` is the outdated abbreviation of "Management"; rows that use it
//! should also carry the current `Manag.` form.

use crate::finding::FindingKind;
use crate::report::RunReport;
use crate::source::{CsvSource, Row};

const OUTDATED_TOKEN: &str = "Manage.";
const CURRENT_TOKEN: &str = "Manag.";

pub fn check(source: &CsvSource<'_>, report: &mut RunReport) {
    for row in source.rows() {
        if uses_outdated_token(&row) {
            report.record(
                FindingKind::OutdatedManageAbbreviation,
                &format!(
                    "Outdated abbreviation used in {} at line {}: {}",
                    source.path().display(),
                    row.line(),
                    row.joined()
                ),
            );
        }
    }
}

/// Whole-field comparison: `Manage.` inside a longer field does not count.
fn uses_outdated_token(row: &Row) -> bool {
    let has = |token: &str| row.fields().iter().any(|field| field == token);
    has(OUTDATED_TOKEN) && !has(CURRENT_TOKEN)
}
