//! Wrong escape sequences inside CSV fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::finding::FindingKind;
use crate::report::RunReport;
use crate::source::CsvSource;

/// A backslash and the character after it. `.` excludes `\n`, so a backslash
/// before a line feed (or at the very end of a field) never matches.
static ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\\.") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid escape regex: {err}"),
});

/// Two-character sequences that are allowed to appear in a field.
const ACCEPTED_ESCAPES: &[&str] = &[r"\\", r"\n", r"\t", r"\r", r#"\""#];

/// Record one `WrongEscape` per unaccepted sequence in any field.
pub fn check(source: &CsvSource<'_>, report: &mut RunReport) {
    for row in source.rows() {
        for field in row.fields() {
            for sequence in bad_escapes(field) {
                tracing::trace!(line = row.line(), sequence, "Wrong escape");
                report.record(
                    FindingKind::WrongEscape,
                    &format!(
                        "Wrong escape character found in {} at line {}: {field}",
                        source.path().display(),
                        row.line()
                    ),
                );
            }
        }
    }
}

/// Leftmost, non-overlapping escape sequences in `field` that are not accepted.
fn bad_escapes(field: &str) -> impl Iterator<Item = &str> {
    ESCAPE_PATTERN
        .find_iter(field)
        .map(|m| m.as_str())
        .filter(|seq| !ACCEPTED_ESCAPES.contains(seq))
}
