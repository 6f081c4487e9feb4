//! Configuration for a quality-check run.

use std::path::PathBuf;

/// Default directory holding the journal CSV files.
pub const DEFAULT_JOURNALS_DIR: &str = "./journals/";

/// Default path of the text summary.
pub const DEFAULT_SUMMARY_FILE: &str = "./check_quality_summary.txt";

/// Run options.
///
/// Where the summary is written is a caller concern; the library only
/// renders it (see [`crate::output`]).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Directory whose `*.csv` children are checked (non-recursive).
    pub journals_dir: PathBuf,
    /// Optional per-file size limit in bytes (default: none). A file over
    /// the limit is a scan error and fails the run.
    pub max_file_size: Option<u64>,
}

impl CheckConfig {
    #[must_use]
    pub fn new(journals_dir: impl Into<PathBuf>) -> Self {
        Self {
            journals_dir: journals_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            journals_dir: PathBuf::from(DEFAULT_JOURNALS_DIR),
            max_file_size: None,
        }
    }
}
