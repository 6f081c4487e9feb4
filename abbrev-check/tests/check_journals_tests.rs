#![allow(clippy::unwrap_used)]
//! Integration tests for `abbrev_check::check_journals`.

use std::fs;
use std::path::Path;

use abbrev_check::{CheckConfig, CheckError, FindingKind, RunReport, check_journals, output};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &[u8]) {
    fs::write(dir.join(name), content).unwrap();
}

fn run(dir: &Path) -> RunReport {
    check_journals(&CheckConfig::new(dir)).unwrap()
}

fn summary(report: &RunReport) -> String {
    let mut buf = Vec::new();
    output::write_summary(report, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_missing_directory_errors() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("journals");
    let result = check_journals(&CheckConfig::new(&missing));
    assert!(matches!(result, Err(CheckError::DirectoryNotFound { .. })));
}

#[test]
fn test_file_path_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "journals", b"");
    let result = check_journals(&CheckConfig::new(tmp.path().join("journals")));
    assert!(matches!(result, Err(CheckError::DirectoryNotFound { .. })));
}

#[test]
fn test_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let report = run(tmp.path());
    assert_eq!(report.files_checked, 0);
    assert_eq!(report.total(), 0);
    assert!(summary(&report).starts_with("Total vulnerabilities: 0\n"));
}

#[test]
fn test_empty_file_has_no_findings() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "empty.csv", b"");
    let report = run(tmp.path());
    assert_eq!(report.files_checked, 1);
    assert_eq!(report.total(), 0);
    assert!(!report.has_errors());
}

#[test]
fn test_clean_file() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "journal_abbreviations_general.csv",
        b"The Journal of Biology,J. Biol.\nNature Medicine,Nat. Med.\nPNAS,PNAS\n",
    );
    let report = run(tmp.path());
    assert_eq!(report.total(), 0, "{:?}", report.findings());
}

#[test]
fn test_only_csv_files_are_checked() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes.txt", b"Journal of Biology,XBio\n");
    write(tmp.path(), "data.csv.bak", b"Journal of Biology,XBio\n");
    let report = run(tmp.path());
    assert_eq!(report.files_checked, 0);
    assert_eq!(report.total(), 0);
}

#[test]
fn test_all_kinds_in_one_file() {
    let tmp = TempDir::new().unwrap();
    let content = concat!(
        "Journal of Testing,JoT\n",
        "Annals of Vol.\\d,Ann. Vol.\n",
        "Journal of Biology,XBio\n",
        "Nature Medicine,Nature Medicine\n",
        "Journal of Testing,JoT2\n",
        "Journal of Management,J. Manag.,Manage.\n",
    );
    write(tmp.path(), "mixed.csv", content.as_bytes());
    let report = run(tmp.path());

    assert_eq!(report.count(FindingKind::WrongEscape), 1);
    assert_eq!(report.count(FindingKind::WrongStartingLetter), 1);
    assert_eq!(report.count(FindingKind::NonUtf8), 0);
    assert_eq!(report.count(FindingKind::DuplicateFullNameOrAbbrev), 1);
    assert_eq!(report.count(FindingKind::IdenticalAbbrevAndFullName), 1);
    assert_eq!(report.count(FindingKind::OutdatedManageAbbreviation), 1);
    assert!(report.has_errors());

    let dup = report
        .findings_of(FindingKind::DuplicateFullNameOrAbbrev)
        .next()
        .unwrap();
    assert!(dup.message.contains("at line 5"), "{}", dup.message);
    assert!(
        dup.message.ends_with("first instance seen at line 1"),
        "{}",
        dup.message
    );
}

#[test]
fn test_non_utf8_file_skips_row_rules_and_continues() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a_bad.csv", b"Journal of Biology,XBio\nCaf\xe9,C.\n");
    write(tmp.path(), "b_good.csv", b"Journal of Biology,XBio\n");
    let report = run(tmp.path());

    assert_eq!(report.files_checked, 2);
    assert_eq!(report.count(FindingKind::NonUtf8), 1);
    // Only the valid file contributes a row finding.
    assert_eq!(report.count(FindingKind::WrongStartingLetter), 1);
    let letter = report
        .findings_of(FindingKind::WrongStartingLetter)
        .next()
        .unwrap();
    assert!(letter.message.contains("b_good.csv"), "{}", letter.message);
}

#[test]
fn test_duplicates_are_scoped_per_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "one.csv", b"Journal of Testing,JoT\n");
    write(tmp.path(), "two.csv", b"Journal of Testing,JoT\n");
    let report = run(tmp.path());
    assert_eq!(report.count(FindingKind::DuplicateFullNameOrAbbrev), 0);
}

#[test]
fn test_warnings_only_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "warn.csv",
        b"Nature Medicine,Nature Medicine\nNature Medicine,Nat. Med.\n",
    );
    let report = run(tmp.path());
    assert_eq!(report.warning_count(), 2);
    assert!(!report.has_errors());
}

#[test]
fn test_large_file_checked_without_default_limit() {
    let tmp = TempDir::new().unwrap();
    // One error row followed by a single padding row of over 10 MiB.
    let mut content = b"Journal of Biology,XBio\nPadding ".to_vec();
    content.resize(content.len() + 11 * 1024 * 1024, b'x');
    content.extend_from_slice(b",P.\n");
    write(tmp.path(), "big.csv", &content);

    let report = run(tmp.path());
    assert_eq!(report.files_checked, 1);
    assert!(report.scan_errors.is_empty());
    assert_eq!(report.count(FindingKind::WrongStartingLetter), 1);
    assert!(!report.ok());
}

#[test]
fn test_file_over_explicit_limit_fails_run() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "big.csv", b"Journal of Biology,J. Biol.\n");
    write(tmp.path(), "small.csv", b"Nature,Nat.\n");
    let mut config = CheckConfig::new(tmp.path());
    config.max_file_size = Some(16);
    let report = check_journals(&config).unwrap();

    assert_eq!(report.files_checked, 1);
    assert_eq!(report.scan_errors.len(), 1);
    assert_eq!(report.total(), 0);
    assert!(!report.has_errors());
    assert!(!report.ok());
}

#[test]
fn test_summary_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "c.csv", b"Journal of Biology,XBio\n");
    write(tmp.path(), "a.csv", b"Vol.\\q,V.\n");
    write(tmp.path(), "b.csv", b"Nature Medicine,Nature Medicine\n");

    let first = summary(&run(tmp.path()));
    let second = summary(&run(tmp.path()));
    assert_eq!(first, second);

    // Files are visited in sorted order.
    let a = first.find("a.csv").unwrap();
    let c = first.find("c.csv").unwrap();
    assert!(a < c);
}

#[test]
fn test_summary_file_written_and_overwritten() {
    let tmp = TempDir::new().unwrap();
    let journals = tmp.path().join("journals");
    fs::create_dir(&journals).unwrap();
    write(&journals, "j.csv", b"Journal of Biology,XBio\n");
    let summary_path = tmp.path().join("check_quality_summary.txt");
    fs::write(&summary_path, "stale content that is longer than nothing\n").unwrap();

    let report = run(&journals);
    output::write_summary_file(&report, &summary_path).unwrap();
    let written = fs::read_to_string(&summary_path).unwrap();

    assert!(written.starts_with("Total vulnerabilities: 1\n"));
    assert!(written.contains("\nERROR Wrong Starting Letter: with 1 instances\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn test_json_output_contract() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "j.csv", b"Nature Medicine,Nature Medicine\n");
    let report = run(tmp.path());

    let mut buf = Vec::new();
    output::write_json(&report, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["has_errors"], false);
    assert_eq!(json["ok"], true);
    assert_eq!(json["counts"].as_array().unwrap().len(), 6);
    assert!(json["scan_errors"].as_array().unwrap().is_empty());
}
