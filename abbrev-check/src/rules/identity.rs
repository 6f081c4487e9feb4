//! Abbreviation identical to its multi-word full name.

use crate::finding::FindingKind;
use crate::report::RunReport;
use crate::source::{CsvSource, Row};

pub fn check(source: &CsvSource<'_>, report: &mut RunReport) {
    for row in source.rows() {
        if is_unabbreviated(&row) {
            report.record(
                FindingKind::IdenticalAbbrevAndFullName,
                &format!(
                    "Abbreviation is the same as full form in {} at line {}: {}",
                    source.path().display(),
                    row.line(),
                    row.field(0).unwrap_or_default()
                ),
            );
        }
    }
}

/// Exactly two fields, equal after trimming, and containing a space.
/// Single-word names may legitimately be their own abbreviation.
fn is_unabbreviated(row: &Row) -> bool {
    if row.field_count() != 2 {
        return false;
    }
    row.entry()
        .is_some_and(|entry| entry.full_name == entry.abbreviation && entry.full_name.contains(' '))
}
