//! CSV row source.
//!
//! Wraps the decoded text of one journal file and hands out fresh row
//! iterators on demand, so each rule can walk the file from the top.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::warn;

/// A full-name/abbreviation pair taken from the first two fields of a row,
/// both trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub full_name: &'a str,
    pub abbreviation: &'a str,
}

/// One CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: u64,
    fields: Vec<String>,
}

impl Row {
    #[must_use]
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    fn from_record(line: u64, record: &StringRecord) -> Self {
        Self {
            line,
            fields: record.iter().map(str::to_owned).collect(),
        }
    }

    /// 1-based line on which the record starts.
    #[must_use]
    pub fn line(&self) -> u64 {
        self.line
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// The row's entry, or `None` when it has fewer than two fields.
    #[must_use]
    pub fn entry(&self) -> Option<Entry<'_>> {
        match self.fields.as_slice() {
            [full_name, abbreviation, ..] => Some(Entry {
                full_name: full_name.trim(),
                abbreviation: abbreviation.trim(),
            }),
            _ => None,
        }
    }

    /// Fields joined with `,`, unquoted.
    #[must_use]
    pub fn joined(&self) -> String {
        self.fields.join(",")
    }
}

/// Maps byte offsets to 1-based line numbers, treating `\n`, `\r\n` and a
/// lone `\r` each as one line break. Offsets must be queried in increasing
/// order.
struct LineCounter<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    /// Line of the first record byte at or after `offset`.
    ///
    /// The parser reports a record as starting where the previous one ended,
    /// which can be on leftover terminators or skipped blank lines, so those
    /// are stepped over first.
    fn line_at(&mut self, offset: u64) -> u64 {
        let len = self.bytes.len();
        let mut start = usize::try_from(offset).unwrap_or(len).clamp(self.offset, len);
        while matches!(self.bytes.get(start), Some(b'\r' | b'\n')) {
            start += 1;
        }

        let breaks = (self.offset..start)
            .filter(|&i| match self.bytes[i] {
                b'\n' => true,
                b'\r' => self.bytes.get(i + 1) != Some(&b'\n'),
                _ => false,
            })
            .count();
        self.line += breaks as u64;
        self.offset = start;
        self.line
    }
}

/// Decoded content of one CSV file.
#[derive(Debug, Clone, Copy)]
pub struct CsvSource<'a> {
    path: &'a Path,
    text: &'a str,
}

impl<'a> CsvSource<'a> {
    #[must_use]
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        Self { path, text }
    }

    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Iterate the file's rows from the beginning.
    ///
    /// Comma-delimited, `"`-quoted, no header row, any number of fields per
    /// record. Blank lines yield nothing. A record the parser rejects ends the
    /// iteration for this file.
    pub fn rows(&self) -> impl Iterator<Item = Row> + 'a {
        let path = self.path;
        let mut lines = LineCounter::new(self.text);
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(self.text.as_bytes())
            .into_records()
            .map_while(move |result| match result {
                Ok(record) => {
                    let start = record.position().map_or(0, csv::Position::byte);
                    Some(Row::from_record(lines.line_at(start), &record))
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Stopped reading CSV rows");
                    None
                }
            })
    }
}
