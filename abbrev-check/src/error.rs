//! Error types for journal quality checks.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal errors: the run could not start or its result could not be written.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The configured journals directory is missing or not a directory.
    #[error("Journals folder not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The kind of scan-level failure that prevented a file from being checked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// A directory listing error (permission denied, etc.).
    WalkError,
}

/// A file that could not be checked at all.
///
/// Distinct from a `Finding`: a finding is a data-quality issue inside a file
/// that was read. Undecodable bytes are a finding (`NonUtf8`), not a scan error.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    #[must_use]
    pub fn new(file: PathBuf, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file,
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
