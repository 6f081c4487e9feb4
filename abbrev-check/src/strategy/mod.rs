//! Input strategies.
//!
//! Only the filesystem strategy exists: a flat directory of CSV files.

pub mod fs;
