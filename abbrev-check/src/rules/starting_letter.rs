//! Abbreviations must start with the first letter of the first significant
//! word of the full name.

use crate::finding::FindingKind;
use crate::report::RunReport;
use crate::source::{CsvSource, Entry};

/// Articles, conjunctions and prepositions (English, French, Spanish) that
/// are skipped when looking for the first significant word.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "of", "or", "in", "on", "at", "to", "for", "with", "by", "la", "el",
    "le", "et",
];

pub fn check(source: &CsvSource<'_>, report: &mut RunReport) {
    for row in source.rows() {
        let Some(entry) = row.entry() else {
            continue;
        };
        if starts_with_wrong_letter(entry) {
            report.record(
                FindingKind::WrongStartingLetter,
                &format!(
                    "Wrong beginning letter found in {} at line {} Full: '{}', Abbrev: '{}'",
                    source.path().display(),
                    row.line(),
                    entry.full_name,
                    entry.abbreviation
                ),
            );
        }
    }
}

fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// `false` whenever there is nothing to compare (empty name or abbreviation,
/// or a full name made only of stop words).
fn starts_with_wrong_letter(entry: Entry<'_>) -> bool {
    let Some(first_word) = entry
        .full_name
        .split_whitespace()
        .find(|word| !is_stop_word(word))
    else {
        return false;
    };
    let Some(first_token) = entry.abbreviation.split_whitespace().next() else {
        return false;
    };
    let Some(initial) = first_word.chars().next() else {
        return false;
    };

    let initial: String = initial.to_lowercase().collect();
    !first_token.to_lowercase().starts_with(&initial)
}
