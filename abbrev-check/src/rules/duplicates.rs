//! Repeated full names or abbreviations within one file.

use std::collections::HashMap;

use crate::finding::FindingKind;
use crate::report::RunReport;
use crate::source::CsvSource;

/// Record a `DuplicateFullNameOrAbbrev` for every row whose full name was
/// already used as a full name, or whose abbreviation was already used as an
/// abbreviation, earlier in the same file.
///
/// Only rows without a collision are remembered, so a duplicate never
/// becomes the anchor for later rows.
pub fn check(source: &CsvSource<'_>, report: &mut RunReport) {
    let mut full_names: HashMap<String, u64> = HashMap::new();
    let mut abbreviations: HashMap<String, u64> = HashMap::new();

    for row in source.rows() {
        let Some(entry) = row.entry() else {
            continue;
        };

        let first_seen = full_names
            .get(entry.full_name)
            .or_else(|| abbreviations.get(entry.abbreviation))
            .copied();

        if let Some(first_line) = first_seen {
            report.record(
                FindingKind::DuplicateFullNameOrAbbrev,
                &format!(
                    "Duplicate found in {} at line {}: Full Name: '{}', Abbreviation: '{}', first instance seen at line {first_line}",
                    source.path().display(),
                    row.line(),
                    entry.full_name,
                    entry.abbreviation
                ),
            );
        } else {
            full_names.insert(entry.full_name.to_owned(), row.line());
            abbreviations.insert(entry.abbreviation.to_owned(), row.line());
        }
    }
}
