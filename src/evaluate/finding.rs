//! Findings and finding groups.

use serde::Serialize;

/// Value shown for a group with nothing to report.
pub const NONE_SENTINEL: &str = "None";

/// How a finding should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Installed and known to work.
    Good,
    /// Works, but worth a look.
    Maybe,
    /// Broken or missing.
    Bad,
    /// Informational.
    Neutral,
}

/// One reportable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    value: String,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl Finding {
    /// Create a finding with no note.
    pub fn new(value: impl Into<String>, severity: Severity) -> Self {
        Self {
            value: value.into(),
            severity,
            note: None,
        }
    }

    pub fn good(value: impl Into<String>) -> Self {
        Self::new(value, Severity::Good)
    }

    pub fn maybe(value: impl Into<String>) -> Self {
        Self::new(value, Severity::Maybe)
    }

    pub fn bad(value: impl Into<String>) -> Self {
        Self::new(value, Severity::Bad)
    }

    pub fn neutral(value: impl Into<String>) -> Self {
        Self::new(value, Severity::Neutral)
    }

    /// Refine the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attach an explanatory note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// A labeled, ordered, never-empty sequence of findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingGroup {
    label: String,
    findings: Vec<Finding>,
}

impl FindingGroup {
    /// Start building a group.
    pub fn builder(label: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            label: label.into(),
            findings: Vec::new(),
        }
    }

    /// A group holding exactly one finding.
    pub fn single(label: impl Into<String>, finding: Finding) -> Self {
        Self::builder(label).push(finding).seal()
    }

    /// A group with one finding per item, or the "None" sentinel if empty.
    pub fn from_findings(
        label: impl Into<String>,
        findings: impl IntoIterator<Item = Finding>,
    ) -> Self {
        Self::builder(label).extend(findings).seal()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The findings, in order. Never empty.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// The worst severity in the group, ignoring Neutral findings.
    pub fn worst(&self) -> Option<Severity> {
        self.findings
            .iter()
            .map(Finding::severity)
            .filter(|s| *s != Severity::Neutral)
            .max_by_key(|s| match s {
                Severity::Good => 0,
                Severity::Maybe => 1,
                Severity::Bad => 2,
                Severity::Neutral => 0,
            })
    }
}

/// Collects findings until the group is sealed.
#[derive(Debug)]
pub struct GroupBuilder {
    label: String,
    findings: Vec<Finding>,
}

impl GroupBuilder {
    pub fn push(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }

    pub fn extend(mut self, findings: impl IntoIterator<Item = Finding>) -> Self {
        self.findings.extend(findings);
        self
    }

    /// Finish the group, substituting a Neutral "None" finding if it is empty.
    pub fn seal(self) -> FindingGroup {
        let findings = if self.findings.is_empty() {
            vec![Finding::neutral(NONE_SENTINEL)]
        } else {
            self.findings
        };

        FindingGroup {
            label: self.label,
            findings,
        }
    }
}
