//! Non-UTF-8 detection.
//!
//! A `str` cannot hold unencodable scalars, so once the whole file decodes
//! there is nothing left to verify line by line.

use std::path::Path;

use crate::finding::FindingKind;
use crate::report::RunReport;

/// Decode `bytes` as UTF-8, recording one `NonUtf8` finding on failure.
///
/// Returns the decoded text when the file is valid.
pub fn check<'a>(path: &Path, bytes: &'a [u8], report: &mut RunReport) -> Option<&'a str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            let line = line_of_offset(bytes, e.valid_up_to());
            report.record(
                FindingKind::NonUtf8,
                &format!(
                    "File {} contains non-UTF-8 characters: {e} (line {line})",
                    path.display()
                ),
            );
            None
        }
    }
}

/// 1-based line number of the byte at `offset`.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    let end = offset.min(bytes.len());
    bytes[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
