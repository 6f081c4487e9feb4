//! Finding types: what a rule reports and how it is classified.

use serde::Serialize;

/// How serious a finding is. Any `Error` fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warn,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
        }
    }
}

/// The category of a finding.
///
/// Declaration order is the order used by the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    WrongEscape,
    WrongStartingLetter,
    NonUtf8,
    DuplicateFullNameOrAbbrev,
    IdenticalAbbrevAndFullName,
    OutdatedManageAbbreviation,
}

impl FindingKind {
    /// All kinds, in report order.
    pub const ALL: [FindingKind; 6] = [
        FindingKind::WrongEscape,
        FindingKind::WrongStartingLetter,
        FindingKind::NonUtf8,
        FindingKind::DuplicateFullNameOrAbbrev,
        FindingKind::IdenticalAbbrevAndFullName,
        FindingKind::OutdatedManageAbbreviation,
    ];

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            FindingKind::WrongEscape | FindingKind::WrongStartingLetter | FindingKind::NonUtf8 => {
                Severity::Error
            }
            FindingKind::DuplicateFullNameOrAbbrev
            | FindingKind::IdenticalAbbrevAndFullName
            | FindingKind::OutdatedManageAbbreviation => Severity::Warn,
        }
    }

    /// Human name without the severity prefix.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FindingKind::WrongEscape => "Wrong Escape",
            FindingKind::WrongStartingLetter => "Wrong Starting Letter",
            FindingKind::NonUtf8 => "Non-UTF8",
            FindingKind::DuplicateFullNameOrAbbrev => "Duplicate FullName/Abbreviation",
            FindingKind::IdenticalAbbrevAndFullName => "Same Abbreviation as Full Name",
            FindingKind::OutdatedManageAbbreviation => "Outdated Manage Abbreviation",
        }
    }

    /// Report label, e.g. `ERROR Wrong Escape`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.severity().as_str(), self.name())
    }
}

/// A single detected issue. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    /// Full message as it appears in the summary, including the
    /// `ERROR: ` / `WARN: ` prefix.
    pub message: String,
}

impl Finding {
    /// Build a finding, prefixing `detail` with the kind's severity tag.
    #[must_use]
    pub fn new(kind: FindingKind, detail: &str) -> Self {
        let severity = kind.severity();
        Self {
            kind,
            severity,
            message: format!("{}: {detail}", severity.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_report_order() {
        let labels: Vec<String> = FindingKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "ERROR Wrong Escape",
                "ERROR Wrong Starting Letter",
                "ERROR Non-UTF8",
                "WARN Duplicate FullName/Abbreviation",
                "WARN Same Abbreviation as Full Name",
                "WARN Outdated Manage Abbreviation",
            ]
        );
    }

    #[test]
    fn test_finding_message_prefix() {
        let f = Finding::new(FindingKind::NonUtf8, "bad bytes");
        assert_eq!(f.severity, Severity::Error);
        assert_eq!(f.message, "ERROR: bad bytes");

        let w = Finding::new(FindingKind::OutdatedManageAbbreviation, "old");
        assert_eq!(w.severity, Severity::Warn);
        assert_eq!(w.message, "WARN: old");
    }
}
