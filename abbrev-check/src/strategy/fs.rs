//! Filesystem source.
//!
//! Lists the CSV files directly inside the journals directory and reads them
//! with a bounded read. Symlinks are not followed and subdirectories are not
//! entered.

use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ScanError, ScanErrorKind};

/// Result of attempting to read a file for checking.
pub enum ScanResult {
    /// Raw file bytes. Decoding is a rule concern.
    Ok(Vec<u8>),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

/// Check if file has the `csv` extension (case-sensitive).
fn is_csv(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("csv")
}

/// Find the CSV files directly inside `dir`.
///
/// Returns `(files, scan_errors)`; `files` is sorted so a run over an
/// unchanged directory always visits files in the same order.
pub fn find_csv_files(dir: &Path) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();

    for entry_result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                scan_errors.push(ScanError::new(
                    path,
                    ScanErrorKind::WalkError,
                    format!("Directory listing error: {walk_err}"),
                ));
                continue;
            }
        };

        // Only regular files; a symlink to a file is left out like a directory.
        if !entry.file_type().is_file() {
            continue;
        }

        let file_path = entry.path();
        if is_csv(file_path) {
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    (files, scan_errors)
}

/// Read a whole file, enforcing `max_file_size` when one is set.
///
/// With a limit, reads at most `max_file_size + 1` bytes so an oversized file
/// is detected without loading it entirely.
pub fn read_file_bounded(path: &Path, max_file_size: Option<u64>) -> ScanResult {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ScanResult::Err(ScanError::new(
                path.to_owned(),
                ScanErrorKind::IoError,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    let mut buffer = Vec::new();
    let limit = max_file_size.map_or(u64::MAX, |max| max.saturating_add(1));
    if let Err(e) = file.take(limit).read_to_end(&mut buffer) {
        return ScanResult::Err(ScanError::new(
            path.to_owned(),
            ScanErrorKind::IoError,
            format!("Failed to read file: {e}"),
        ));
    }

    if let Some(max_file_size) = max_file_size
        && buffer.len() as u64 > max_file_size
    {
        return ScanResult::Err(ScanError::new(
            path.to_owned(),
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    ScanResult::Ok(buffer)
}
